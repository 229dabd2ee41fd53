use alloc::sync::Arc;

pub mod errors;
pub mod pipe;

pub use errors::PipeError;
pub use pipe::Pipe;

/// Operations the file table needs from a pipe. Reads and writes may block
/// for as long as the pipe decides; the file table does not hold its own lock
/// while they run.
pub trait PipeChannel {
  /// Copy available bytes into the buffer. Returns 0 once the pipe is empty
  /// and its write end has been closed.
  fn read(&self, buffer: &mut [u8]) -> Result<usize, PipeError>;

  /// Copy bytes from the buffer into the pipe. Fails with `BrokenPipe` only if
  /// the read end closed before any byte was transferred; otherwise returns
  /// the count that made it in.
  fn write(&self, buffer: &[u8]) -> Result<usize, PipeError>;

  /// Close one end of the pipe. `write_end` is true when the closing file was
  /// opened for writing.
  fn close(&self, write_end: bool);
}

pub type PipeType = dyn PipeChannel + Send + Sync;

/// Create a pipe with the default buffer size, with both ends open
pub fn create_pipe() -> Arc<Pipe> {
  Arc::new(Pipe::new())
}
