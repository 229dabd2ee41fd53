/// Number of open files the system-wide file table can hold at once
pub const NFILE: usize = 100;

/// Number of device slots in the device registry
pub const NDEV: usize = 10;

/// Size in bytes of the buffer behind each in-memory pipe
pub const PIPE_SIZE: usize = 512;
