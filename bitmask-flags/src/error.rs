// Errors reported when checking a flag enumeration definition.

use std::fmt;

use crate::register::Register;

/// A flag enumeration that breaks the single-bit precondition.
///
/// The register operations never return this; it only comes out of
/// [`validate_definition`](crate::validate_definition) and friends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagDefinitionError {
    /// A non-zero constant with more than one bit set.
    NotSingleBit { name: String, value: Register },
    /// Two constants sharing at least one bit.
    Overlap { first: String, second: String, bits: Register },
    /// A constant that does not fit in a 32-bit register.
    OutOfRange { name: String, value: i128 },
}

impl fmt::Display for FlagDefinitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagDefinitionError::NotSingleBit { name, value } => {
                write!(f, "flag {name} = {value:#x} has more than one bit set")
            }
            FlagDefinitionError::Overlap { first, second, bits } => {
                write!(f, "flags {first} and {second} share bits {bits:#x}")
            }
            FlagDefinitionError::OutOfRange { name, value } => {
                write!(f, "flag {name} = {value} does not fit in 32 bits")
            }
        }
    }
}

impl std::error::Error for FlagDefinitionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_are_human_readable() {
        let err = FlagDefinitionError::NotSingleBit { name: "FireAndFrost".into(), value: 3 };
        assert_eq!(err.to_string(), "flag FireAndFrost = 0x3 has more than one bit set");

        let err = FlagDefinitionError::Overlap {
            first: "Fire".into(),
            second: "Burn".into(),
            bits: 1,
        };
        assert_eq!(err.to_string(), "flags Fire and Burn share bits 0x1");

        let err = FlagDefinitionError::OutOfRange { name: "Huge".into(), value: 1 << 40 };
        assert_eq!(err.to_string(), "flag Huge = 1099511627776 does not fit in 32 bits");
    }
}
