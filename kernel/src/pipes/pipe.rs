use core::hint::spin_loop;
use spin::Mutex;
use crate::buffers::RingBuffer;
use crate::params::PIPE_SIZE;
use super::{PipeChannel, PipeError};

struct PipeState {
  buffer: RingBuffer,
  read_open: bool,
  write_open: bool,
}

/// A Pipe is a simple fifo queue of byte data, allowing data to be passed
/// between different processes.
pub struct Pipe {
  state: Mutex<PipeState>,
}

impl Pipe {
  pub fn new() -> Pipe {
    Pipe::with_capacity(PIPE_SIZE)
  }

  pub fn with_capacity(capacity: usize) -> Pipe {
    Pipe {
      state: Mutex::new(PipeState {
        buffer: RingBuffer::new(capacity),
        read_open: true,
        write_open: true,
      }),
    }
  }

  /// Get the number of bytes that have been written, but not yet read
  pub fn available_bytes(&self) -> usize {
    self.state.lock().buffer.available_bytes()
  }

  /// Return true if there are bytes to read
  pub fn can_read(&self) -> bool {
    self.available_bytes() > 0
  }

  pub fn is_read_open(&self) -> bool {
    self.state.lock().read_open
  }

  pub fn is_write_open(&self) -> bool {
    self.state.lock().write_open
  }
}

impl Default for Pipe {
  fn default() -> Pipe {
    Pipe::new()
  }
}

impl PipeChannel for Pipe {
  fn read(&self, buffer: &mut [u8]) -> Result<usize, PipeError> {
    if buffer.is_empty() {
      return Ok(0);
    }
    loop {
      {
        let mut state = self.state.lock();
        if state.buffer.available_bytes() > 0 {
          return Ok(state.buffer.read(buffer));
        }
        if !state.write_open {
          return Ok(0);
        }
      }
      spin_loop();
    }
  }

  fn write(&self, buffer: &[u8]) -> Result<usize, PipeError> {
    let mut written = 0;
    while written < buffer.len() {
      {
        let mut state = self.state.lock();
        if !state.read_open {
          if written > 0 {
            return Ok(written);
          }
          return Err(PipeError::BrokenPipe);
        }
        written += state.buffer.write(&buffer[written..]);
      }
      if written < buffer.len() {
        spin_loop();
      }
    }
    Ok(written)
  }

  fn close(&self, write_end: bool) {
    let mut state = self.state.lock();
    if write_end {
      state.write_open = false;
    } else {
      state.read_open = false;
    }
  }
}
