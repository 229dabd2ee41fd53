/// Error codes that can be returned from syscalls
/// They do not correspond to POSIX error numbers, but they can be mapped
/// to POSIX values for compatibility.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum SystemError {
  /// Used when the error doesn't match a known code
  Unknown = 0,
  /// File operation was performed on an unopened or bad descriptor
  BadFileDescriptor = 1,
  /// File or directory path does not exist
  NoSuchEntity = 4,
  /// Directory operation was performed on a non-directory path or descriptor
  NotDirectory = 5,
  /// Pipe was closed at the other end
  BrokenPipe = 7,
  /// An error occurred while reading / writing
  IOError = 10,
  /// The system file table has no free entries
  MaxFilesExceeded = 11,
  /// The handle was not opened for the requested access
  PermissionDenied = 12,
  /// The handle's backend does not implement the operation
  Unsupported = 13,
  /// Attempted to create a path that already exists
  AlreadyExists = 14,
  /// The device or filesystem is full
  NoSpace = 15,
  /// Attempted to open a directory for file IO
  IsDirectory = 16,
  /// No device is installed with the requested number
  NoSuchDevice = 17,
}

impl SystemError {
  /// Extract the SystemError value from a numeric code
  pub fn from_code(code: u32) -> SystemError {
    match code & 0xffff {
      1 => SystemError::BadFileDescriptor,
      4 => SystemError::NoSuchEntity,
      5 => SystemError::NotDirectory,
      7 => SystemError::BrokenPipe,
      10 => SystemError::IOError,
      11 => SystemError::MaxFilesExceeded,
      12 => SystemError::PermissionDenied,
      13 => SystemError::Unsupported,
      14 => SystemError::AlreadyExists,
      15 => SystemError::NoSpace,
      16 => SystemError::IsDirectory,
      17 => SystemError::NoSuchDevice,

      _ => SystemError::Unknown,
    }
  }

  /// Convert a SystemError to be sent as a number in a register
  pub fn to_code(&self) -> u32 {
    0x80000000 | (*self as u32)
  }
}

pub fn result_from_code(code: u32) -> Result<u32, SystemError> {
  if code & 0x80000000 == 0 {
    Ok(code & 0x7fffffff)
  } else {
    Err(SystemError::from_code(code))
  }
}
