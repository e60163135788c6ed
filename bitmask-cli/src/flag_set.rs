// FlagSet: a flag enumeration loaded at runtime from config.

use bitmask_flags::register::{self, Register};
use bitmask_flags::{to_register, validate_definition, FlagDefinitionError};

use crate::config::EnumConfig;
use crate::error::CliError;

/// Named flags of one enumeration, ordered by bit position.
#[derive(Debug, Clone)]
pub struct FlagSet {
    pub name: String,
    pub flags: Vec<(String, Register)>,
}

/// A register split into declared flag names and leftover bits.
#[derive(Debug, PartialEq, Eq)]
pub struct Decomposition<'a> {
    pub names: Vec<&'a str>,
    pub unknown: Register,
}

impl FlagSet {
    /// Convert a config table, narrowing values to 32 bits. Does not check
    /// the single-bit precondition; see [`FlagSet::validate`].
    pub fn from_config(name: &str, config: &EnumConfig) -> Result<Self, FlagDefinitionError> {
        let mut flags = config
            .flags
            .iter()
            .map(|(flag, &value)| -> Result<(String, Register), FlagDefinitionError> {
                Ok((flag.clone(), to_register(flag, value as i128)?))
            })
            .collect::<Result<Vec<_>, _>>()?;
        // Unsigned order puts the sign bit last and the zero sentinel first.
        flags.sort_by(|(a_name, a), (b_name, b)| {
            (*a as u32).cmp(&(*b as u32)).then_with(|| a_name.cmp(b_name))
        });
        Ok(Self { name: name.to_string(), flags })
    }

    pub fn validate(&self) -> Result<(), FlagDefinitionError> {
        let flags: Vec<(&str, Register)> =
            self.flags.iter().map(|(n, v)| (n.as_str(), *v)).collect();
        validate_definition(&flags)
    }

    pub fn lookup(&self, flag: &str) -> Result<Register, CliError> {
        self.flags
            .iter()
            .find(|(name, _)| name == flag)
            .map(|&(_, value)| value)
            .ok_or_else(|| CliError::UnknownFlag {
                enum_name: self.name.clone(),
                flag: flag.to_string(),
            })
    }

    /// Every declared flag OR-ed together.
    pub fn all(&self) -> Register {
        self.flags
            .iter()
            .fold(register::EMPTY, |acc, &(_, value)| register::add_flags(acc, value))
    }

    /// Names of the non-zero flags fully set in `bits`. An empty register
    /// maps to the zero sentinel's name when the enumeration declares one.
    pub fn decompose(&self, bits: Register) -> Decomposition<'_> {
        let mut names: Vec<&str> = self
            .flags
            .iter()
            .filter(|&&(_, value)| value != 0 && register::has_all_flags(bits, value))
            .map(|(name, _)| name.as_str())
            .collect();
        if bits == register::EMPTY {
            names.extend(
                self.flags.iter().filter(|(_, value)| *value == 0).map(|(n, _)| n.as_str()).take(1),
            );
        }
        Decomposition { names, unknown: register::remove_flags(bits, self.all()) }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;

    use super::*;

    pub fn elemental_damage() -> FlagSet {
        let flags: HashMap<String, i64> =
            [("Poison", 8), ("None", 0), ("Fire", 1), ("Lightning", 4), ("Frost", 2)]
                .into_iter()
                .map(|(n, v)| (n.to_string(), v))
                .collect();
        FlagSet::from_config("ElementalDamage", &EnumConfig { description: None, flags }).unwrap()
    }

    #[test]
    fn flags_sorted_by_bit() {
        let set = elemental_damage();
        let names: Vec<&str> = set.flags.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["None", "Fire", "Frost", "Lightning", "Poison"]);
        assert_eq!(set.all(), 15);
        assert!(set.validate().is_ok());
    }

    #[test]
    fn lookup_and_unknown_flag() {
        let set = elemental_damage();
        assert_eq!(set.lookup("Lightning").unwrap(), 4);
        let err = set.lookup("Acid").unwrap_err();
        assert_eq!(err.to_string(), "unknown flag Acid in enum ElementalDamage");
    }

    #[test]
    fn decompose_register() {
        let set = elemental_damage();
        assert_eq!(
            set.decompose(5),
            Decomposition { names: vec!["Fire", "Lightning"], unknown: 0 }
        );
        assert_eq!(set.decompose(0x21), Decomposition { names: vec!["Fire"], unknown: 0x20 });
        assert_eq!(set.decompose(0), Decomposition { names: vec!["None"], unknown: 0 });
    }

    #[test]
    fn out_of_range_value_is_rejected() {
        let flags = HashMap::from([("Huge".to_string(), 1i64 << 40)]);
        let err = FlagSet::from_config("Wide", &EnumConfig { description: None, flags }).unwrap_err();
        assert!(matches!(err, FlagDefinitionError::OutOfRange { .. }));
    }

    #[test]
    fn composite_value_fails_validation() {
        let flags = HashMap::from([("Read".to_string(), 1i64), ("ReadWrite".to_string(), 3)]);
        let set = FlagSet::from_config("Access", &EnumConfig { description: None, flags }).unwrap();
        assert_eq!(
            set.validate(),
            Err(FlagDefinitionError::NotSingleBit { name: "ReadWrite".into(), value: 3 })
        );
    }
}
