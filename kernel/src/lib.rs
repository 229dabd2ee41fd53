//! The kernel's system-wide table of open files.
//!
//! Every open file, whether it reads from a pipe, an inode on the mounted
//! filesystem, or a device driver, occupies one reference-counted entry in a
//! fixed-size `FileTable`. Process descriptor tables hold `FileHandle`s into
//! it; the table dispatches reads, writes, and `stat` to the right backend and
//! tears the backend down when the last handle is closed.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::sync::Arc;

pub mod buffers;
pub mod devices;
pub mod files;
pub mod filesystems;
pub mod params;
pub mod pipes;

#[cfg(test)]
mod testing;

use files::FileTable;
use filesystems::FileSystemType;

/// Install the built-in device drivers and build the file table on top of the
/// root filesystem. Must run before any other file operation.
pub fn init(fs: Arc<FileSystemType>) -> &'static FileTable {
  devices::init();
  files::init(fs)
}
