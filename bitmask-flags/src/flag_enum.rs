// Generic flag traits and the mutating (in-place) register API.

use crate::register::{self, Register};

/// Anything that converts losslessly to a register mask.
///
/// Implemented by `#[derive(FlagEnum)]` for flag enumerations and by
/// [`FlagMask`](crate::FlagMask). Plain integers deliberately do not
/// implement it: raw masks go through the [`register`] functions.
pub trait FlagBits: Copy {
    fn to_bits(self) -> Register;
}

/// A closed enumeration of named single-bit flags.
///
/// Usually derived:
/// ```ignore
/// #[derive(Clone, Copy, PartialEq, Eq, Debug, FlagEnum)]
/// #[repr(u8)]
/// pub enum ElementalDamage {
///     None = 0,
///     Fire = 1,
///     Frost = 2,
///     Lightning = 4,
///     Poison = 8,
/// }
/// ```
pub trait FlagEnum: FlagBits + Eq + 'static {
    /// Type name, used in `Debug` output and error messages.
    const NAME: &'static str;

    /// Every variant in declaration order, including any zero sentinel.
    const VARIANTS: &'static [Self];

    /// Variant name as declared.
    fn name(self) -> &'static str;

    /// The variant whose value is exactly `bits`, if any.
    fn from_bits_exact(bits: Register) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.to_bits() == bits)
    }

    /// The variant with the given declared name, if any.
    fn from_name(name: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.name() == name)
    }
}

/// In-place register operations, generic over the mask type.
///
/// Each method is exactly the matching [`register`] function applied to
/// `*self` and `mask.to_bits()`, with the result stored back for the
/// mutators.
///
/// The mutators are a plain read-modify-write. Sharing one register between
/// threads needs external synchronization.
pub trait FlagRegister {
    /// Set every flag in `to_add`.
    fn add_flags<M: FlagBits>(&mut self, to_add: M);
    /// Clear every flag in `to_remove`.
    fn remove_flags<M: FlagBits>(&mut self, to_remove: M);
    /// Toggle every flag in `to_flip`.
    fn flip_flags<M: FlagBits>(&mut self, to_flip: M);
    /// True if any flag in `to_check` is set.
    fn has_any_flags<M: FlagBits>(&self, to_check: M) -> bool;
    /// True if every flag in `to_check` is set.
    fn has_all_flags<M: FlagBits>(&self, to_check: M) -> bool;
}

impl FlagRegister for Register {
    #[inline]
    fn add_flags<M: FlagBits>(&mut self, to_add: M) {
        *self = register::add_flags(*self, to_add.to_bits());
    }

    #[inline]
    fn remove_flags<M: FlagBits>(&mut self, to_remove: M) {
        *self = register::remove_flags(*self, to_remove.to_bits());
    }

    #[inline]
    fn flip_flags<M: FlagBits>(&mut self, to_flip: M) {
        *self = register::flip_flags(*self, to_flip.to_bits());
    }

    #[inline]
    fn has_any_flags<M: FlagBits>(&self, to_check: M) -> bool {
        register::has_any_flags(*self, to_check.to_bits())
    }

    #[inline]
    fn has_all_flags<M: FlagBits>(&self, to_check: M) -> bool {
        register::has_all_flags(*self, to_check.to_bits())
    }
}


#[cfg(test)]
mod tests {
    use super::test_enum::Element;
    use super::*;
    use crate::register::EMPTY;

    #[test]
    fn mutating_form_matches_value_form() {
        let mut debuffs = EMPTY;
        debuffs.add_flags(Element::Fire | Element::Lightning);
        assert_eq!(debuffs, register::add_flags(EMPTY, 5));
        assert!(debuffs.has_any_flags(Element::Poison | Element::Lightning));
        assert!(!debuffs.has_all_flags(Element::Fire | Element::Frost));

        debuffs.remove_flags(Element::Fire);
        assert_eq!(debuffs, 4);

        debuffs.flip_flags(Element::Fire | Element::Lightning);
        assert_eq!(debuffs, register::flip_flags(4, 5));
    }

    #[test]
    fn single_variant_is_a_mask() {
        let mut flags = EMPTY;
        flags.add_flags(Element::Frost);
        assert!(flags.has_all_flags(Element::Frost));
        flags.flip_flags(Element::Frost);
        assert_eq!(flags, EMPTY);
    }

    #[test]
    fn zero_sentinel_is_vacuous() {
        let mut flags: Register = 0b1010;
        flags.add_flags(Element::None);
        flags.remove_flags(Element::None);
        assert_eq!(flags, 0b1010);
        assert!(!flags.has_any_flags(Element::None));
        assert!(flags.has_all_flags(Element::None));
    }

    #[test]
    fn lookup_by_bits_and_name() {
        assert_eq!(Element::from_bits_exact(4), Some(Element::Lightning));
        assert_eq!(Element::from_bits_exact(0), Some(Element::None));
        assert_eq!(Element::from_bits_exact(3), None);
        assert_eq!(Element::from_name("Poison"), Some(Element::Poison));
        assert_eq!(Element::from_name("poison"), None);
    }
}
