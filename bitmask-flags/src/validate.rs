// Flag enumeration definition checks.
//
// The const predicates back the compile-time assertions emitted by
// #[derive(FlagEnum)]. The Result-returning variants carry names and are
// used for definitions only known at runtime (e.g. loaded from config).

use crate::error::FlagDefinitionError;
use crate::flag_enum::FlagEnum;
use crate::register::Register;

const REGISTER_MIN: i128 = Register::MIN as i128;
const REGISTER_MAX_UNSIGNED: i128 = u32::MAX as i128;

/// True if every non-zero value is a single bit and no two values share a bit.
/// Zero values (a "none" sentinel) are always accepted.
pub const fn is_valid_flag_set(values: &[Register]) -> bool {
    let mut seen: Register = 0;
    let mut i = 0;
    while i < values.len() {
        let value = values[i];
        if value != 0 {
            if value.count_ones() != 1 || (seen & value) != 0 {
                return false;
            }
            seen |= value;
        }
        i += 1;
    }
    true
}

/// True if every value is representable in 32 bits, either as a signed or
/// an unsigned integer.
pub const fn fits_register(values: &[i128]) -> bool {
    let mut i = 0;
    while i < values.len() {
        if values[i] < REGISTER_MIN || values[i] > REGISTER_MAX_UNSIGNED {
            return false;
        }
        i += 1;
    }
    true
}

/// Narrow a wide constant to a register, reinterpreting `u32` values above
/// `i32::MAX` as their two's-complement bit pattern.
pub fn to_register(name: &str, value: i128) -> Result<Register, FlagDefinitionError> {
    if !fits_register(&[value]) {
        return Err(FlagDefinitionError::OutOfRange { name: name.to_string(), value });
    }
    Ok(value as u32 as Register)
}

/// Check a named definition, reporting the first offending constant.
pub fn validate_definition(flags: &[(&str, Register)]) -> Result<(), FlagDefinitionError> {
    for (i, &(name, value)) in flags.iter().enumerate() {
        if value == 0 {
            continue;
        }
        if value.count_ones() != 1 {
            return Err(FlagDefinitionError::NotSingleBit { name: name.to_string(), value });
        }
        if let Some(&(first, other)) = flags[..i].iter().find(|(_, other)| other & value != 0) {
            return Err(FlagDefinitionError::Overlap {
                first: first.to_string(),
                second: name.to_string(),
                bits: other & value,
            });
        }
    }
    Ok(())
}

/// [`validate_definition`] over every variant of `E`.
pub fn validate_flag_enum<E: FlagEnum>() -> Result<(), FlagDefinitionError> {
    let flags: Vec<(&str, Register)> =
        E::VARIANTS.iter().map(|v| (v.name(), v.to_bits())).collect();
    validate_definition(&flags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flag_enum::test_enum::Element;

    #[test]
    fn single_bits_with_sentinel_are_valid() {
        assert!(is_valid_flag_set(&[0, 1, 2, 4, 8]));
        assert!(is_valid_flag_set(&[]));
        assert!(is_valid_flag_set(&[0, 0]));
        assert!(is_valid_flag_set(&[i32::MIN]));
    }

    #[test]
    fn multi_bit_or_colliding_values_are_invalid() {
        assert!(!is_valid_flag_set(&[1, 2, 3]));
        assert!(!is_valid_flag_set(&[1, 4, 1]));
        assert!(!is_valid_flag_set(&[-1]));
    }

    #[test]
    fn register_range() {
        assert!(fits_register(&[0, i32::MIN as i128, u32::MAX as i128]));
        assert!(!fits_register(&[1 << 32]));
        assert!(!fits_register(&[i32::MIN as i128 - 1]));

        assert_eq!(to_register("Top", 0x8000_0000), Ok(i32::MIN));
        assert_eq!(to_register("Low", 4), Ok(4));
        assert!(matches!(
            to_register("Huge", 1 << 40),
            Err(FlagDefinitionError::OutOfRange { .. })
        ));
    }

    #[test]
    fn validate_definition_names_the_offender() {
        assert_eq!(validate_definition(&[("None", 0), ("Fire", 1), ("Frost", 2)]), Ok(()));

        assert_eq!(
            validate_definition(&[("Fire", 1), ("FireAndFrost", 3)]),
            Err(FlagDefinitionError::NotSingleBit { name: "FireAndFrost".into(), value: 3 })
        );

        assert_eq!(
            validate_definition(&[("Fire", 1), ("Frost", 2), ("Burn", 1)]),
            Err(FlagDefinitionError::Overlap {
                first: "Fire".into(),
                second: "Burn".into(),
                bits: 1,
            })
        );
    }

    #[test]
    fn validate_flag_enum_accepts_element() {
        assert_eq!(validate_flag_enum::<Element>(), Ok(()));
    }
}
