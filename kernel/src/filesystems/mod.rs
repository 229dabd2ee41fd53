//! The file table does not implement storage itself. Inode-backed files are
//! reached through the `FileSystem` trait, implemented by whichever filesystem
//! the kernel mounts.

pub mod filesystem;

pub use filesystem::{FileSystem, FileSystemType, FsError, InodeRef};
