use alloc::sync::Arc;
use alloc::vec::Vec;
use spin::Mutex;
use syscall::files::{FileStatus, OpenFlags};
use crate::devices::DeviceDriverType;
use crate::filesystems::FileSystemType;
use crate::params::NFILE;
use crate::pipes::{self, PipeType};
use super::cursor::SeekMethod;
use super::error::{FileError, FileResult};
use super::handle::FileHandle;
use super::open_file::{Backend, OpenFile};

/// One entry in the table. A free slot has no references and no file. A slot
/// returned by `allocate` has one reference and stays unbound until its owner
/// installs a file with `bind`.
struct Slot {
  ref_count: usize,
  file: Option<Arc<OpenFile>>,
}

impl Slot {
  const fn free() -> Slot {
    Slot {
      ref_count: 0,
      file: None,
    }
  }
}

/// The system-wide table of open files. Process descriptor tables store
/// `FileHandle`s that index into it.
///
/// A single lock covers the slot array: finding a free slot, changing
/// reference counts, and binding or unbinding files. Backend IO, including
/// the teardown that runs when the last reference closes, always happens after
/// the lock has been dropped.
pub struct FileTable {
  slots: Mutex<Vec<Slot>>,
  fs: Arc<FileSystemType>,
}

impl FileTable {
  pub fn new(fs: Arc<FileSystemType>) -> FileTable {
    FileTable::with_capacity(fs, NFILE)
  }

  pub fn with_capacity(fs: Arc<FileSystemType>, capacity: usize) -> FileTable {
    let slots = (0..capacity).map(|_| Slot::free()).collect();
    FileTable {
      slots: Mutex::new(slots),
      fs,
    }
  }

  pub fn capacity(&self) -> usize {
    self.slots.lock().len()
  }

  /// Number of slots that hold no references
  pub fn free_slots(&self) -> usize {
    self.slots.lock().iter().filter(|slot| slot.ref_count == 0).count()
  }

  pub fn ref_count(&self, handle: FileHandle) -> usize {
    let slots = self.slots.lock();
    match slots.get(handle.as_usize()) {
      Some(slot) => slot.ref_count,
      None => panic!("ref_count: {} is outside the file table", handle),
    }
  }

  /// Reserve the first free slot. The returned handle holds one reference and
  /// has no backend until `bind` is called on it.
  pub fn allocate(&self) -> FileResult<FileHandle> {
    let mut slots = self.slots.lock();
    let index = match slots.iter().position(|slot| slot.ref_count == 0) {
      Some(index) => index,
      None => {
        log::warn!("file table full ({} entries)", slots.len());
        return Err(FileError::TooManyOpenFiles);
      },
    };
    slots[index] = Slot {
      ref_count: 1,
      file: None,
    };
    log::trace!("allocated {}", FileHandle::new(index));
    Ok(FileHandle::new(index))
  }

  /// Install a file in a slot returned by `allocate`
  pub fn bind(&self, handle: FileHandle, file: OpenFile) {
    let mut slots = self.slots.lock();
    let slot = match slots.get_mut(handle.as_usize()) {
      Some(slot) => slot,
      None => panic!("bind: {} is outside the file table", handle),
    };
    if slot.ref_count < 1 {
      panic!("bind: {} was not allocated", handle);
    }
    if slot.file.is_some() {
      panic!("bind: {} is already bound", handle);
    }
    log::debug!("bound {} to {:?}", handle, file.backend());
    slot.file = Some(Arc::new(file));
  }

  fn allocate_bound(&self, file: OpenFile) -> FileResult<FileHandle> {
    let handle = self.allocate()?;
    self.bind(handle, file);
    Ok(handle)
  }

  /// Open a file on the mounted filesystem. Write-only and read-write modes
  /// grant write access; every mode but write-only grants read access.
  pub fn open(&self, path: &str, flags: OpenFlags) -> FileResult<FileHandle> {
    let handle = self.allocate()?;
    let opened = if flags.contains(OpenFlags::CREATE) {
      self.fs.create(path)
    } else {
      self.fs.open(path, flags)
    };
    match opened {
      Ok(inode) => {
        let backend = Backend::Inode(Arc::clone(&self.fs), inode);
        self.bind(handle, OpenFile::new(backend, flags.is_readable(), flags.is_writable()));
        Ok(handle)
      },
      Err(err) => {
        log::debug!("open {:?} failed: {:?}", path, err);
        self.close(handle);
        Err(err.into())
      },
    }
  }

  /// Bind one end of an existing pipe to a new handle
  pub fn bind_pipe(&self, pipe: Arc<PipeType>, readable: bool, writable: bool) -> FileResult<FileHandle> {
    self.allocate_bound(OpenFile::new(Backend::Pipe(pipe), readable, writable))
  }

  /// Bind a custom driver to a new handle
  pub fn bind_custom(&self, driver: Arc<DeviceDriverType>, readable: bool, writable: bool) -> FileResult<FileHandle> {
    self.allocate_bound(OpenFile::new(Backend::Custom(driver), readable, writable))
  }

  /// Create a pipe and return handles to its read end and write end
  pub fn pipe(&self) -> FileResult<(FileHandle, FileHandle)> {
    let pipe = pipes::create_pipe();
    let read_handle = self.bind_pipe(pipe.clone(), true, false)?;
    match self.bind_pipe(pipe, false, true) {
      Ok(write_handle) => Ok((read_handle, write_handle)),
      Err(err) => {
        self.close(read_handle);
        Err(err)
      },
    }
  }

  /// Add a reference to an open handle. Duplicating a handle that holds no
  /// references is a kernel bug.
  pub fn duplicate(&self, handle: FileHandle) -> FileHandle {
    let mut slots = self.slots.lock();
    let slot = match slots.get_mut(handle.as_usize()) {
      Some(slot) => slot,
      None => panic!("duplicate: {} is outside the file table", handle),
    };
    if slot.ref_count < 1 {
      panic!("duplicate: {} is not open", handle);
    }
    slot.ref_count += 1;
    log::trace!("duplicated {} (refs: {})", handle, slot.ref_count);
    handle
  }

  /// Drop a reference to a handle. When the last reference goes away the slot
  /// is freed and the backend is torn down, outside the table lock.
  pub fn close(&self, handle: FileHandle) {
    let file = {
      let mut slots = self.slots.lock();
      let slot = match slots.get_mut(handle.as_usize()) {
        Some(slot) => slot,
        None => panic!("close: {} is outside the file table", handle),
      };
      if slot.ref_count < 1 {
        panic!("close: {} is not open", handle);
      }
      slot.ref_count -= 1;
      if slot.ref_count > 0 {
        log::trace!("closed {} (refs: {})", handle, slot.ref_count);
        return;
      }
      slot.file.take()
    };

    if let Some(file) = file {
      log::debug!("releasing {} ({:?})", handle, file.backend());
      file.release();
    }
  }

  /// Fetch the file behind an open handle. The table lock is only held long
  /// enough to take a reference to it.
  fn get_open_file(&self, handle: FileHandle, operation: &str) -> Arc<OpenFile> {
    let slots = self.slots.lock();
    let slot = match slots.get(handle.as_usize()) {
      Some(slot) => slot,
      None => panic!("{}: {} is outside the file table", operation, handle),
    };
    if slot.ref_count < 1 {
      panic!("{}: {} is not open", operation, handle);
    }
    match &slot.file {
      Some(file) => Arc::clone(file),
      None => panic!("{}: {} has no backend", operation, handle),
    }
  }

  pub fn read(&self, handle: FileHandle, buffer: &mut [u8]) -> FileResult<usize> {
    self.get_open_file(handle, "read").read(buffer)
  }

  pub fn write(&self, handle: FileHandle, buffer: &[u8]) -> FileResult<usize> {
    self.get_open_file(handle, "write").write(buffer)
  }

  /// Only inode-backed files have metadata to report
  pub fn stat(&self, handle: FileHandle) -> FileResult<FileStatus> {
    self.get_open_file(handle, "stat").stat()
  }

  pub fn seek(&self, handle: FileHandle, method: SeekMethod) -> FileResult<usize> {
    self.get_open_file(handle, "seek").seek(method)
  }
}
