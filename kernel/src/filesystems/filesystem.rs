use syscall::files::{FileStatus, OpenFlags};

/// A filesystem's own reference to an open inode. The filesystem counts these
/// independently of how many file table handles point at the same open file:
/// every successful `open` or `create` hands out one reference, and exactly one
/// `release` gives it back.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct InodeRef(u32);

impl InodeRef {
  pub fn new(inode: u32) -> InodeRef {
    InodeRef(inode)
  }

  pub fn as_u32(&self) -> u32 {
    self.0
  }
}

/// Failures reported by a filesystem
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FsError {
  /// The path does not name an existing file
  NoSuchEntity,
  /// A file already exists at the path being created
  AlreadyExists,
  /// The path names a directory, which cannot be opened for file IO
  IsDirectory,
  /// No room is left for new inodes or data
  NoSpace,
  /// The underlying storage failed to complete the transfer
  IOError,
}

/// The narrow interface the file table uses to reach the filesystem that owns
/// inode-backed files. Implementations are responsible for their own internal
/// locking; the table never holds its lock while calling into them.
pub trait FileSystem {
  /// Look up an existing file and take a reference to its inode
  fn open(&self, path: &str, flags: OpenFlags) -> Result<InodeRef, FsError>;

  /// Create a file at `path` and take a reference to its inode
  fn create(&self, path: &str) -> Result<InodeRef, FsError>;

  /// Copy bytes starting at `offset` into the buffer. A short count is not an
  /// error; zero means the offset is at or past the end of the file.
  fn read(&self, inode: InodeRef, offset: usize, buffer: &mut [u8]) -> Result<usize, FsError>;

  /// Copy bytes from the buffer into the file starting at `offset`
  fn write(&self, inode: InodeRef, offset: usize, buffer: &[u8]) -> Result<usize, FsError>;

  fn stat(&self, inode: InodeRef) -> Result<FileStatus, FsError>;

  /// Give back a reference obtained from `open` or `create`
  fn release(&self, inode: InodeRef);
}

pub type FileSystemType = dyn FileSystem + Send + Sync;
