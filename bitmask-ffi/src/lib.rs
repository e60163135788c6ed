// bitmask-ffi: #[repr(C)] types, host API table, and the C ABI bodies of the
// value-returning register operations. This crate defines the complete
// contract with a scripting host; `bitmask::entry!()` emits the symbols.

pub mod error;
pub mod host;
pub mod ffi_guard;
pub mod logging;
pub mod exports;

pub use error::*;
pub use host::{host, is_host_registered, register_host, BitmaskHostApi};
pub use ffi_guard::ffi_boundary;
pub use logging::{log_message, LOG_DISPLAY, LOG_ERROR, LOG_WARNING};
pub use bitmask_flags::Register;
