#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PipeError {
  /// Writing to a pipe with no readers
  BrokenPipe,
}
