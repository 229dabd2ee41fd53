use crate::files::{FileResult, OpenFile};

/// A custom file backend. Drivers receive the open file itself along with
/// its current cursor, and are responsible for moving the cursor if they use
/// one.
pub trait DeviceDriver {
  #![allow(unused_variables)]

  fn read(&self, file: &OpenFile, offset: usize, buffer: &mut [u8]) -> FileResult<usize>;

  fn write(&self, file: &OpenFile, offset: usize, buffer: &[u8]) -> FileResult<usize>;

  /// Called once, after the last handle to the file has been closed
  fn close(&self, file: &OpenFile) {
  }
}

pub type DeviceDriverType = dyn DeviceDriver + Sync + Send;
