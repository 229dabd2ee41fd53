use crate::files::{FileResult, OpenFile};
use super::driver::DeviceDriver;

/// Reads end immediately; writes are accepted and discarded
pub struct NullDriver;

impl NullDriver {
  pub const fn new() -> Self {
    Self
  }
}

impl DeviceDriver for NullDriver {
  fn read(&self, _file: &OpenFile, _offset: usize, _buffer: &mut [u8]) -> FileResult<usize> {
    Ok(0)
  }

  fn write(&self, _file: &OpenFile, _offset: usize, buffer: &[u8]) -> FileResult<usize> {
    Ok(buffer.len())
  }
}
