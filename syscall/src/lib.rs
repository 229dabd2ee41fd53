#![cfg_attr(not(test), no_std)]

//! Types shared between the kernel's file layer and userspace callers: the
//! open-mode bits passed to `open`, the record filled in by `stat`, and the
//! numeric error codes returned in registers.

pub mod files;
pub mod result;

pub use result::{result_from_code, SystemError};
