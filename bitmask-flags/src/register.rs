// Value-returning register operations on plain integers.

/// A flag register: one boolean flag per bit.
///
/// Signed to match the 32-bit integer type of the scripting boundary; the
/// algebra only ever uses bitwise logic, so the sign bit is just bit 31.
pub type Register = i32;

/// Register with no flags set.
pub const EMPTY: Register = 0;

/// Return `flags` with every bit of `to_add` set.
#[inline]
pub const fn add_flags(flags: Register, to_add: Register) -> Register {
    flags | to_add
}

/// Return `flags` with every bit of `to_remove` cleared.
#[inline]
pub const fn remove_flags(flags: Register, to_remove: Register) -> Register {
    flags & !to_remove
}

/// Return `flags` with every bit of `to_flip` toggled.
#[inline]
pub const fn flip_flags(flags: Register, to_flip: Register) -> Register {
    flags ^ to_flip
}

/// True if at least one bit of `to_check` is set in `flags`.
/// Always false for an empty mask.
#[inline]
pub const fn has_any_flags(flags: Register, to_check: Register) -> bool {
    (flags & to_check) != 0
}

/// True if every bit of `to_check` is set in `flags`.
/// Always true for an empty mask.
#[inline]
pub const fn has_all_flags(flags: Register, to_check: Register) -> bool {
    (flags & to_check) == to_check
}
