// Prelude: one-import access to the flag traits, mask type and derive.
//
// Usage: `use bitmask::prelude::*;`

pub use bitmask_flags::{FlagBits, FlagEnum, FlagMask, FlagRegister, Register};

// Derive macro (macro namespace, coexists with the trait above)
pub use bitmask_macros::FlagEnum;

// Logging
pub use bitmask_ffi::{blog, LOG_DISPLAY, LOG_ERROR, LOG_WARNING};
