use crate::files::{FileResult, OpenFile};
use super::driver::DeviceDriver;

/// Fills every read with zeroes; writes are accepted and discarded
pub struct ZeroDriver;

impl ZeroDriver {
  pub const fn new() -> Self {
    Self
  }
}

impl DeviceDriver for ZeroDriver {
  fn read(&self, _file: &OpenFile, _offset: usize, buffer: &mut [u8]) -> FileResult<usize> {
    buffer.fill(0);
    Ok(buffer.len())
  }

  fn write(&self, _file: &OpenFile, _offset: usize, buffer: &[u8]) -> FileResult<usize> {
    Ok(buffer.len())
  }
}
