// bitmask: User-facing library crate. Users depend on this, derive `FlagEnum`
// on their flag enumerations, and optionally call `bitmask::entry!()` in a
// cdylib to export the value-returning operations over the C ABI.
//
//! ## Calling conventions
//!
//! | Form            | Where                          | Operands                        |
//! |-----------------|--------------------------------|---------------------------------|
//! | Mutating        | [`FlagRegister`] on `Register` | any `#[derive(FlagEnum)]` enum or [`FlagMask`] |
//! | Value-returning | [`register`] functions         | plain `i32`                     |
//! | C ABI           | `bitmask_*` symbols from [`entry!`] | plain `int32_t` / `bool`   |
//!
//! All three compute the same bits: the mutating form is the value form
//! with the result stored back.

// Re-exports for derive path resolution and user access.
pub use bitmask_flags as flags;
pub use bitmask_ffi as ffi;
pub use bitmask_macros::FlagEnum;

pub use bitmask_flags::register;
pub use bitmask_flags::{FlagBits, FlagEnum, FlagMask, FlagRegister, Register};
pub use bitmask_ffi::blog;

pub mod prelude;

/// Generates the C ABI exports for the value-returning register operations.
///
/// Place this at the top of your cdylib crate's `lib.rs`:
/// ```ignore
/// bitmask::entry!();
/// ```
///
/// Exports `bitmask_add_flags`, `bitmask_remove_flags`, `bitmask_flip_flags`
/// (`int32_t, int32_t -> int32_t`), `bitmask_has_any_flags`,
/// `bitmask_has_all_flags` (`int32_t, int32_t -> bool`) and
/// `bitmask_register_host`.
#[macro_export]
macro_rules! entry {
    () => {
        mod __bitmask_entry {
            #[unsafe(no_mangle)]
            pub extern "C" fn bitmask_add_flags(
                flags: $crate::Register,
                to_add: $crate::Register,
            ) -> $crate::Register {
                $crate::ffi::exports::add_flags(flags, to_add)
            }

            #[unsafe(no_mangle)]
            pub extern "C" fn bitmask_remove_flags(
                flags: $crate::Register,
                to_remove: $crate::Register,
            ) -> $crate::Register {
                $crate::ffi::exports::remove_flags(flags, to_remove)
            }

            #[unsafe(no_mangle)]
            pub extern "C" fn bitmask_flip_flags(
                flags: $crate::Register,
                to_flip: $crate::Register,
            ) -> $crate::Register {
                $crate::ffi::exports::flip_flags(flags, to_flip)
            }

            #[unsafe(no_mangle)]
            pub extern "C" fn bitmask_has_any_flags(
                flags: $crate::Register,
                to_check: $crate::Register,
            ) -> bool {
                $crate::ffi::exports::has_any_flags(flags, to_check)
            }

            #[unsafe(no_mangle)]
            pub extern "C" fn bitmask_has_all_flags(
                flags: $crate::Register,
                to_check: $crate::Register,
            ) -> bool {
                $crate::ffi::exports::has_all_flags(flags, to_check)
            }

            /// # Safety
            /// `host` must be null or point to a valid `BitmaskHostApi`.
            #[unsafe(no_mangle)]
            pub unsafe extern "C" fn bitmask_register_host(
                host: *const $crate::ffi::BitmaskHostApi,
            ) -> $crate::ffi::BitmaskErrorCode {
                // SAFETY: forwarded caller contract.
                unsafe { $crate::ffi::exports::register_host(host) }
            }
        }
    };
}
