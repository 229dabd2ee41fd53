use core::fmt;
use syscall::SystemError;
use crate::devices::DeviceError;
use crate::filesystems::FsError;
use crate::pipes::PipeError;

pub type FileResult<T> = Result<T, FileError>;

/// Recoverable failures of file table operations. Misuse of the table itself,
/// like closing a handle that holds no references, is not reported here: it
/// panics instead.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FileError {
  /// Every entry in the file table is in use
  TooManyOpenFiles,
  /// The handle was not opened for the requested access
  PermissionDenied,
  /// The handle's backend does not support the operation
  Unsupported,
  FileSystem(FsError),
  Pipe(PipeError),
  Device(DeviceError),
}

impl FileError {
  pub fn to_system_error(&self) -> SystemError {
    match self {
      FileError::TooManyOpenFiles => SystemError::MaxFilesExceeded,
      FileError::PermissionDenied => SystemError::PermissionDenied,
      FileError::Unsupported => SystemError::Unsupported,
      FileError::FileSystem(err) => match err {
        FsError::NoSuchEntity => SystemError::NoSuchEntity,
        FsError::AlreadyExists => SystemError::AlreadyExists,
        FsError::IsDirectory => SystemError::IsDirectory,
        FsError::NoSpace => SystemError::NoSpace,
        FsError::IOError => SystemError::IOError,
      },
      FileError::Pipe(PipeError::BrokenPipe) => SystemError::BrokenPipe,
      FileError::Device(DeviceError::NoSuchDevice) => SystemError::NoSuchDevice,
      FileError::Device(DeviceError::RegistryFull) => SystemError::NoSpace,
    }
  }
}

impl From<FsError> for FileError {
  fn from(err: FsError) -> FileError {
    FileError::FileSystem(err)
  }
}

impl From<PipeError> for FileError {
  fn from(err: PipeError) -> FileError {
    FileError::Pipe(err)
  }
}

impl From<DeviceError> for FileError {
  fn from(err: DeviceError) -> FileError {
    FileError::Device(err)
  }
}

impl fmt::Display for FileError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      FileError::TooManyOpenFiles => write!(f, "too many open files"),
      FileError::PermissionDenied => write!(f, "permission denied"),
      FileError::Unsupported => write!(f, "operation not supported"),
      FileError::FileSystem(err) => write!(f, "filesystem error: {:?}", err),
      FileError::Pipe(err) => write!(f, "pipe error: {:?}", err),
      FileError::Device(err) => write!(f, "device error: {:?}", err),
    }
  }
}
