use bitflags::bitflags;

bitflags! {
  /// Access mode and creation bits accepted by `open`.
  /// Read-only is the absence of both access bits.
  #[derive(Copy, Clone, Debug, Eq, PartialEq)]
  pub struct OpenFlags: u32 {
    const WRONLY = 0x001;
    const RDWR = 0x002;
    const CREATE = 0x200;
  }
}

impl OpenFlags {
  pub const RDONLY: OpenFlags = OpenFlags::empty();

  /// Every mode except write-only can read
  pub fn is_readable(&self) -> bool {
    !self.contains(OpenFlags::WRONLY)
  }

  pub fn is_writable(&self) -> bool {
    self.intersects(OpenFlags::WRONLY | OpenFlags::RDWR)
  }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum FileType {
  File = 1,
  Directory = 2,
  Device = 3,
}

/// Metadata about an open inode, as copied out by `stat`
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(C)]
pub struct FileStatus {
  pub device: u32,
  pub inode: u32,
  pub file_type: FileType,
  pub links: u16,
  pub byte_size: u32,
}
