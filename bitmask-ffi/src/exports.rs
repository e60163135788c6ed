// C ABI bodies of the value-returning register operations.
//
// `bitmask::entry!()` emits the `#[no_mangle]` symbols that forward here,
// so a host only ever sees plain 32-bit integers and bools.

use bitmask_flags::register::{self, Register};

use crate::error::BitmaskErrorCode;
use crate::ffi_guard::ffi_boundary;
use crate::host::{self, BitmaskHostApi};

pub extern "C" fn add_flags(flags: Register, to_add: Register) -> Register {
    ffi_boundary(flags, || register::add_flags(flags, to_add))
}

pub extern "C" fn remove_flags(flags: Register, to_remove: Register) -> Register {
    ffi_boundary(flags, || register::remove_flags(flags, to_remove))
}

pub extern "C" fn flip_flags(flags: Register, to_flip: Register) -> Register {
    ffi_boundary(flags, || register::flip_flags(flags, to_flip))
}

pub extern "C" fn has_any_flags(flags: Register, to_check: Register) -> bool {
    ffi_boundary(false, || register::has_any_flags(flags, to_check))
}

pub extern "C" fn has_all_flags(flags: Register, to_check: Register) -> bool {
    ffi_boundary(false, || register::has_all_flags(flags, to_check))
}

/// # Safety
/// `table` must be null or point to a valid `BitmaskHostApi`.
pub unsafe extern "C" fn register_host(table: *const BitmaskHostApi) -> BitmaskErrorCode {
    // SAFETY: forwarded caller contract.
    unsafe { host::register_host(table) }
}
