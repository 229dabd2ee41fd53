use core::fmt;

/// Index of an entry in the system file table. Handles are handed out by the
/// table and are only meaningful while the entry holds a reference.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct FileHandle(usize);

impl FileHandle {
  pub fn new(index: usize) -> FileHandle {
    FileHandle(index)
  }

  pub fn as_usize(&self) -> usize {
    self.0
  }
}

impl fmt::Display for FileHandle {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "file#{}", self.0)
  }
}
