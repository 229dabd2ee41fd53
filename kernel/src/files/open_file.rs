use alloc::sync::Arc;
use core::fmt;
use spin::Mutex;
use syscall::files::FileStatus;
use crate::devices::DeviceDriverType;
use crate::filesystems::{FileSystemType, FsError, InodeRef};
use crate::pipes::PipeType;
use super::cursor::SeekMethod;
use super::error::{FileError, FileResult};

/// The object an open file forwards its IO to. Custom handlers take priority
/// by construction: a file bound to a driver never reaches the pipe or inode
/// paths.
#[derive(Clone)]
pub enum Backend {
  /// One end of a pipe; which end is determined by the file's access flags
  Pipe(Arc<PipeType>),
  /// An inode held open by the filesystem that owns it
  Inode(Arc<FileSystemType>, InodeRef),
  /// A driver that implements read, write, and close itself
  Custom(Arc<DeviceDriverType>),
}

impl Backend {
  pub fn kind_name(&self) -> &'static str {
    match self {
      Backend::Pipe(_) => "pipe",
      Backend::Inode(_, _) => "inode",
      Backend::Custom(_) => "custom",
    }
  }
}

impl fmt::Debug for Backend {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Backend::Inode(_, inode) => write!(f, "Inode({})", inode.as_u32()),
      other => f.write_str(other.kind_name()),
    }
  }
}

/// The shared state behind a file table entry. Access flags are fixed when the
/// file is bound; only the cursor changes afterwards.
pub struct OpenFile {
  readable: bool,
  writable: bool,
  offset: Mutex<usize>,
  backend: Backend,
}

impl OpenFile {
  pub fn new(backend: Backend, readable: bool, writable: bool) -> OpenFile {
    OpenFile {
      readable,
      writable,
      offset: Mutex::new(0),
      backend,
    }
  }

  pub fn backend(&self) -> &Backend {
    &self.backend
  }

  pub fn get_offset(&self) -> usize {
    *self.offset.lock()
  }

  /// Move the cursor directly. Custom drivers use this to manage their own
  /// position.
  pub fn set_offset(&self, offset: usize) {
    *self.offset.lock() = offset;
  }

  pub fn seek(&self, method: SeekMethod) -> FileResult<usize> {
    if let Backend::Pipe(_) = self.backend {
      return Err(FileError::Unsupported);
    }
    let mut offset = self.offset.lock();
    *offset = method.from_current_position(*offset);
    Ok(*offset)
  }

  /// Inode reads transfer at the cursor and advance it by the number of bytes
  /// read. The cursor stays locked for the transfer, so reads through
  /// duplicated handles are serialized against each other; a `seek` on a
  /// duplicate spins until a slow filesystem transfer finishes. A read whose
  /// end would pass the top of the cursor range returns 0 without reaching the
  /// filesystem.
  pub fn read(&self, buffer: &mut [u8]) -> FileResult<usize> {
    if !self.readable {
      return Err(FileError::PermissionDenied);
    }
    match &self.backend {
      Backend::Custom(driver) => driver.read(self, self.get_offset(), buffer),
      Backend::Pipe(pipe) => Ok(pipe.read(buffer)?),
      Backend::Inode(fs, inode) => {
        let mut offset = self.offset.lock();
        if offset.checked_add(buffer.len()).is_none() {
          return Ok(0);
        }
        let read = fs.read(*inode, *offset, buffer)?;
        *offset += read;
        Ok(read)
      },
    }
  }

  /// Same cursor rules as `read`. A write that would carry the cursor past the
  /// top of its range fails with `NoSpace`.
  pub fn write(&self, buffer: &[u8]) -> FileResult<usize> {
    if !self.writable {
      return Err(FileError::PermissionDenied);
    }
    match &self.backend {
      Backend::Custom(driver) => driver.write(self, self.get_offset(), buffer),
      Backend::Pipe(pipe) => Ok(pipe.write(buffer)?),
      Backend::Inode(fs, inode) => {
        let mut offset = self.offset.lock();
        if offset.checked_add(buffer.len()).is_none() {
          return Err(FsError::NoSpace.into());
        }
        let written = fs.write(*inode, *offset, buffer)?;
        *offset += written;
        Ok(written)
      },
    }
  }

  pub fn stat(&self) -> FileResult<FileStatus> {
    match &self.backend {
      Backend::Inode(fs, inode) => Ok(fs.stat(*inode)?),
      _ => Err(FileError::Unsupported),
    }
  }

  /// Tear down the backend once the last table reference is gone. A custom
  /// driver's close fully replaces the built-in teardown.
  pub(super) fn release(&self) {
    match &self.backend {
      Backend::Custom(driver) => driver.close(self),
      Backend::Pipe(pipe) => pipe.close(self.writable),
      Backend::Inode(fs, inode) => fs.release(*inode),
    }
  }
}

impl fmt::Debug for OpenFile {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.debug_struct("OpenFile")
      .field("readable", &self.readable)
      .field("writable", &self.writable)
      .field("offset", &self.offset.try_lock().map(|offset| *offset))
      .field("backend", &self.backend)
      .finish()
  }
}
