// Operand parsing: integer literals and `|`-separated flag names.

use bitmask_flags::register::{self, Register};
use bitmask_flags::to_register;

use crate::error::CliError;
use crate::flag_set::FlagSet;

/// Parse an operand such as `5`, `0x0c`, `0b101`, `-1`, `Fire|Lightning` or
/// `Fire | 0x10`. Names need `set`; literals never do.
pub fn parse_operand(text: &str, set: Option<&FlagSet>) -> Result<Register, CliError> {
    let mut bits = register::EMPTY;
    for term in text.split('|').map(str::trim) {
        if term.is_empty() {
            return Err(CliError::InvalidValue(text.to_string()));
        }
        bits = register::add_flags(bits, parse_term(term, set)?);
    }
    Ok(bits)
}

fn parse_term(term: &str, set: Option<&FlagSet>) -> Result<Register, CliError> {
    let starts_numeric = term
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '-' || c == '+');
    if starts_numeric {
        return parse_literal(term);
    }
    match set {
        Some(set) => set.lookup(term),
        None => Err(CliError::MissingEnum(term.to_string())),
    }
}

/// Decimal (signed), `0x` hex or `0b` binary. Hex and binary are bit
/// patterns of up to 32 bits and may set the sign bit.
fn parse_literal(term: &str) -> Result<Register, CliError> {
    let invalid = || CliError::InvalidValue(term.to_string());
    let digits = term.replace('_', "");

    let radix_digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .map(|d| (d, 16))
        .or_else(|| {
            digits.strip_prefix("0b").or_else(|| digits.strip_prefix("0B")).map(|d| (d, 2))
        });

    if let Some((d, radix)) = radix_digits {
        let value = u32::from_str_radix(d, radix).map_err(|_| invalid())?;
        return Ok(value as Register);
    }

    let value: i64 = digits.parse().map_err(|_| invalid())?;
    to_register(term, value as i128).map_err(|_| invalid())
}
