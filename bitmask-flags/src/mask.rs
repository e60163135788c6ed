// FlagMask<E>: a register value tagged with its flag enumeration.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Sub, SubAssign,
};

use crate::flag_enum::{FlagBits, FlagEnum};
use crate::register::{self, Register};

/// A combination of flags from one enumeration.
///
/// Same representation as a [`Register`]; the type parameter only keeps masks
/// of different enumerations apart. Bits that match no variant are carried
/// through unchanged by every operation except [`from_bits_truncate`] and `!`.
///
/// [`from_bits_truncate`]: FlagMask::from_bits_truncate
#[repr(transparent)]
pub struct FlagMask<E> {
    bits: Register,
    _flags: PhantomData<E>,
}

impl<E: FlagEnum> FlagMask<E> {
    /// Mask with no flags set.
    #[inline]
    pub const fn empty() -> Self {
        Self::from_bits(register::EMPTY)
    }

    /// Wrap a raw register value, keeping unknown bits.
    #[inline]
    pub const fn from_bits(bits: Register) -> Self {
        Self { bits, _flags: PhantomData }
    }

    /// Every declared flag of `E`.
    pub fn all() -> Self {
        let bits = E::VARIANTS
            .iter()
            .fold(register::EMPTY, |acc, v| register::add_flags(acc, v.to_bits()));
        Self::from_bits(bits)
    }

    /// Wrap a raw register value, dropping bits no variant declares.
    pub fn from_bits_truncate(bits: Register) -> Self {
        Self::from_bits(bits & Self::all().bits)
    }

    #[inline]
    pub const fn bits(self) -> Register {
        self.bits
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.bits == register::EMPTY
    }

    /// Bits set in this mask that no variant of `E` declares.
    pub fn unknown_bits(self) -> Register {
        register::remove_flags(self.bits, Self::all().bits)
    }

    /// True if every flag in `flags` is set.
    #[inline]
    pub fn contains<M: FlagBits>(self, flags: M) -> bool {
        register::has_all_flags(self.bits, flags.to_bits())
    }

    /// True if any flag in `flags` is set.
    #[inline]
    pub fn intersects<M: FlagBits>(self, flags: M) -> bool {
        register::has_any_flags(self.bits, flags.to_bits())
    }

    #[inline]
    pub fn insert<M: FlagBits>(&mut self, flags: M) {
        self.bits = register::add_flags(self.bits, flags.to_bits());
    }

    #[inline]
    pub fn remove<M: FlagBits>(&mut self, flags: M) {
        self.bits = register::remove_flags(self.bits, flags.to_bits());
    }

    #[inline]
    pub fn toggle<M: FlagBits>(&mut self, flags: M) {
        self.bits = register::flip_flags(self.bits, flags.to_bits());
    }

    /// Set non-zero variants, in declaration order.
    pub fn iter(self) -> Iter<E> {
        Iter { bits: self.bits, index: 0, _flags: PhantomData }
    }
}

impl<E: FlagEnum> FlagBits for FlagMask<E> {
    #[inline]
    fn to_bits(self) -> Register {
        self.bits
    }
}

impl<E: FlagEnum> From<E> for FlagMask<E> {
    #[inline]
    fn from(flag: E) -> Self {
        Self::from_bits(flag.to_bits())
    }
}

// Manual impls so no bounds leak onto E.

impl<E> Clone for FlagMask<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for FlagMask<E> {}

impl<E> PartialEq for FlagMask<E> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<E> Eq for FlagMask<E> {}

impl<E> Hash for FlagMask<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<E> Default for FlagMask<E> {
    fn default() -> Self {
        Self { bits: register::EMPTY, _flags: PhantomData }
    }
}

// ---------------------------------------------------------------------------
// Operators. The right-hand side is anything convertible to a mask of the
// same enumeration, i.e. `E` or `FlagMask<E>`.
// ---------------------------------------------------------------------------

impl<E: FlagEnum, M: Into<FlagMask<E>>> BitOr<M> for FlagMask<E> {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: M) -> Self {
        Self::from_bits(register::add_flags(self.bits, rhs.into().bits))
    }
}

impl<E: FlagEnum, M: Into<FlagMask<E>>> BitOrAssign<M> for FlagMask<E> {
    #[inline]
    fn bitor_assign(&mut self, rhs: M) {
        *self = *self | rhs;
    }
}

impl<E: FlagEnum, M: Into<FlagMask<E>>> BitAnd<M> for FlagMask<E> {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: M) -> Self {
        Self::from_bits(self.bits & rhs.into().bits)
    }
}

impl<E: FlagEnum, M: Into<FlagMask<E>>> BitAndAssign<M> for FlagMask<E> {
    #[inline]
    fn bitand_assign(&mut self, rhs: M) {
        *self = *self & rhs;
    }
}

impl<E: FlagEnum, M: Into<FlagMask<E>>> BitXor<M> for FlagMask<E> {
    type Output = Self;
    #[inline]
    fn bitxor(self, rhs: M) -> Self {
        Self::from_bits(register::flip_flags(self.bits, rhs.into().bits))
    }
}

impl<E: FlagEnum, M: Into<FlagMask<E>>> BitXorAssign<M> for FlagMask<E> {
    #[inline]
    fn bitxor_assign(&mut self, rhs: M) {
        *self = *self ^ rhs;
    }
}

impl<E: FlagEnum, M: Into<FlagMask<E>>> Sub<M> for FlagMask<E> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: M) -> Self {
        Self::from_bits(register::remove_flags(self.bits, rhs.into().bits))
    }
}

impl<E: FlagEnum, M: Into<FlagMask<E>>> SubAssign<M> for FlagMask<E> {
    #[inline]
    fn sub_assign(&mut self, rhs: M) {
        *self = *self - rhs;
    }
}

/// Complement within the declared flags of `E`.
impl<E: FlagEnum> Not for FlagMask<E> {
    type Output = Self;
    fn not(self) -> Self {
        Self::from_bits(!self.bits & Self::all().bits)
    }
}

// ---------------------------------------------------------------------------
// Iteration
// ---------------------------------------------------------------------------

/// Iterator over the variants set in a [`FlagMask`].
pub struct Iter<E> {
    bits: Register,
    index: usize,
    _flags: PhantomData<E>,
}

impl<E: FlagEnum> Iterator for Iter<E> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        while let Some(&variant) = E::VARIANTS.get(self.index) {
            self.index += 1;
            let bits = variant.to_bits();
            if bits != register::EMPTY && register::has_all_flags(self.bits, bits) {
                return Some(variant);
            }
        }
        None
    }
}

impl<E: FlagEnum> FusedIterator for Iter<E> {}

impl<E: FlagEnum> IntoIterator for FlagMask<E> {
    type Item = E;
    type IntoIter = Iter<E>;

    fn into_iter(self) -> Iter<E> {
        self.iter()
    }
}

impl<E: FlagEnum> FromIterator<E> for FlagMask<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut mask = Self::empty();
        mask.extend(iter);
        mask
    }
}

impl<E: FlagEnum> Extend<E> for FlagMask<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for flag in iter {
            self.insert(flag);
        }
    }
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

impl<E: FlagEnum> fmt::Display for FlagMask<E> {
    /// `Fire | Lightning`, unknown bits as a trailing hex term, `0` when empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut wrote = false;
        for flag in self.iter() {
            if wrote {
                f.write_str(" | ")?;
            }
            f.write_str(flag.name())?;
            wrote = true;
        }
        let unknown = self.unknown_bits();
        if unknown != register::EMPTY {
            if wrote {
                f.write_str(" | ")?;
            }
            write!(f, "{:#x}", unknown)?;
            wrote = true;
        }
        if !wrote {
            f.write_str("0")?;
        }
        Ok(())
    }
}

impl<E: FlagEnum> fmt::Debug for FlagMask<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FlagMask<{}>({})", E::NAME, self)
    }
}
