//! Open files shared between processes. Each process maps its own descriptors
//! to `FileHandle`s, which index into the kernel's `FileTable`. An entry in the
//! table is backed by a pipe, an inode on the mounted filesystem, or a custom
//! driver, and stays alive until every descriptor referring to it is closed.

use alloc::sync::Arc;
use spin::Once;
use crate::filesystems::FileSystemType;

pub mod cursor;
pub mod error;
pub mod handle;
pub mod open_file;
pub mod table;

pub use cursor::SeekMethod;
pub use error::{FileError, FileResult};
pub use handle::FileHandle;
pub use open_file::{Backend, OpenFile};
pub use table::FileTable;

static FILE_TABLE: Once<FileTable> = Once::new();

/// Build the kernel's file table on top of the root filesystem. Only the first
/// call constructs the table; later calls return the existing one.
pub fn init(fs: Arc<FileSystemType>) -> &'static FileTable {
  FILE_TABLE.call_once(|| {
    log::debug!("initializing file table");
    FileTable::new(fs)
  })
}

pub fn get_file_table() -> &'static FileTable {
  match FILE_TABLE.get() {
    Some(table) => table,
    None => panic!("File table was not initialized"),
  }
}
