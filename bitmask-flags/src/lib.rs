// bitmask-flags: flag register algebra over a 32-bit integer.
// Zero external dependencies. Everything here is pure and total.
//
//! Two calling conventions over the same four bitwise operations:
//!
//! - [`register`]: value-returning, plain integers only. This is the shape
//!   exported across the C boundary by `bitmask-ffi`.
//! - [`FlagRegister`]: mutating, generic over any [`FlagBits`] type (a
//!   `#[derive(FlagEnum)]` enum or a [`FlagMask`]), so native call sites never
//!   cast to an integer themselves.
//!
//! ```ignore
//! let mut debuffs: Register = 0;
//! debuffs.add_flags(ElementalDamage::Fire | ElementalDamage::Lightning);
//! assert!(debuffs.has_any_flags(ElementalDamage::Poison | ElementalDamage::Lightning));
//! ```
//!
//! # Flag enumeration precondition
//!
//! Every non-zero constant of a flag enumeration must be a single bit, no two
//! constants may share a bit, and all of them must fit in 32 bits. The
//! operations themselves never check this: a violating enumeration silently
//! produces overlapping flags. `#[derive(FlagEnum)]` enforces it at compile
//! time; hand-written or runtime-loaded definitions can use [`validate`].

pub mod error;
pub mod flag_enum;
pub mod mask;
pub mod register;
pub mod validate;

pub use error::FlagDefinitionError;
pub use flag_enum::{FlagBits, FlagEnum, FlagRegister};
pub use mask::{FlagMask, Iter};
pub use register::{Register, EMPTY};
pub use validate::{
    fits_register, is_valid_flag_set, to_register, validate_definition, validate_flag_enum,
};
