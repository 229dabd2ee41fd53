//! In-memory filesystem used by the unit tests. It keeps per-inode counts of
//! outstanding references and releases so tests can check that the file table
//! gives each reference back exactly once.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use spin::Mutex;
use syscall::files::{FileStatus, FileType, OpenFlags};
use crate::filesystems::{FileSystem, FsError, InodeRef};

#[derive(Default)]
struct MemoryInode {
  data: Vec<u8>,
  open_refs: usize,
  releases: usize,
}

#[derive(Default)]
struct Contents {
  paths: BTreeMap<String, InodeRef>,
  inodes: BTreeMap<InodeRef, MemoryInode>,
  transfers: usize,
}

pub struct MemoryFileSystem {
  contents: Mutex<Contents>,
}

impl MemoryFileSystem {
  pub fn new() -> MemoryFileSystem {
    MemoryFileSystem {
      contents: Mutex::new(Contents::default()),
    }
  }

  pub fn add_file(&self, path: &str, data: &[u8]) -> InodeRef {
    let mut contents = self.contents.lock();
    let inode = InodeRef::new(contents.inodes.len() as u32 + 1);
    contents.paths.insert(String::from(path), inode);
    contents.inodes.insert(inode, MemoryInode {
      data: data.to_vec(),
      ..MemoryInode::default()
    });
    inode
  }

  pub fn lookup(&self, path: &str) -> Option<InodeRef> {
    self.contents.lock().paths.get(path).copied()
  }

  pub fn open_refs(&self, inode: InodeRef) -> usize {
    self.contents.lock().inodes[&inode].open_refs
  }

  pub fn releases(&self, inode: InodeRef) -> usize {
    self.contents.lock().inodes[&inode].releases
  }

  /// Total number of reads and writes that reached the filesystem
  pub fn transfers(&self) -> usize {
    self.contents.lock().transfers
  }
}

impl FileSystem for MemoryFileSystem {
  fn open(&self, path: &str, _flags: OpenFlags) -> Result<InodeRef, FsError> {
    let mut contents = self.contents.lock();
    let inode = *contents.paths.get(path).ok_or(FsError::NoSuchEntity)?;
    contents.inodes.get_mut(&inode).ok_or(FsError::IOError)?.open_refs += 1;
    Ok(inode)
  }

  fn create(&self, path: &str) -> Result<InodeRef, FsError> {
    let inode = match self.lookup(path) {
      Some(existing) => existing,
      None => self.add_file(path, &[]),
    };
    let mut contents = self.contents.lock();
    contents.inodes.get_mut(&inode).ok_or(FsError::IOError)?.open_refs += 1;
    Ok(inode)
  }

  fn read(&self, inode: InodeRef, offset: usize, buffer: &mut [u8]) -> Result<usize, FsError> {
    let mut contents = self.contents.lock();
    contents.transfers += 1;
    let data = &contents.inodes.get(&inode).ok_or(FsError::IOError)?.data;
    if offset >= data.len() {
      return Ok(0);
    }
    let count = buffer.len().min(data.len() - offset);
    buffer[..count].copy_from_slice(&data[offset..offset + count]);
    Ok(count)
  }

  fn write(&self, inode: InodeRef, offset: usize, buffer: &[u8]) -> Result<usize, FsError> {
    let mut contents = self.contents.lock();
    contents.transfers += 1;
    let data = &mut contents.inodes.get_mut(&inode).ok_or(FsError::IOError)?.data;
    let end = offset + buffer.len();
    if data.len() < end {
      data.resize(end, 0);
    }
    data[offset..end].copy_from_slice(buffer);
    Ok(buffer.len())
  }

  fn stat(&self, inode: InodeRef) -> Result<FileStatus, FsError> {
    let contents = self.contents.lock();
    let entry = contents.inodes.get(&inode).ok_or(FsError::NoSuchEntity)?;
    Ok(FileStatus {
      device: 1,
      inode: inode.as_u32(),
      file_type: FileType::File,
      links: 1,
      byte_size: entry.data.len() as u32,
    })
  }

  fn release(&self, inode: InodeRef) {
    let mut contents = self.contents.lock();
    if let Some(entry) = contents.inodes.get_mut(&inode) {
      entry.open_refs -= 1;
      entry.releases += 1;
    }
  }
}
