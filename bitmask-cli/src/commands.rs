// Command execution: resolve operands, run the register operation, report.

use std::io::Write;

use serde::Serialize;

use bitmask_flags::register::{self, Register};
use bitmask_flags::FlagDefinitionError;

use crate::config::BitmaskConfig;
use crate::error::CliError;
use crate::flag_set::FlagSet;
use crate::operand::parse_operand;

/// One of the five register operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Remove,
    Flip,
    HasAny,
    HasAll,
}

impl Op {
    fn label(self) -> &'static str {
        match self {
            Op::Add => "add",
            Op::Remove => "remove",
            Op::Flip => "flip",
            Op::HasAny => "has-any",
            Op::HasAll => "has-all",
        }
    }

    fn eval(self, flags: Register, mask: Register) -> OpValue {
        match self {
            Op::Add => OpValue::Register(register::add_flags(flags, mask)),
            Op::Remove => OpValue::Register(register::remove_flags(flags, mask)),
            Op::Flip => OpValue::Register(register::flip_flags(flags, mask)),
            Op::HasAny => OpValue::Test(register::has_any_flags(flags, mask)),
            Op::HasAll => OpValue::Test(register::has_all_flags(flags, mask)),
        }
    }
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum OpValue {
    Register(Register),
    Test(bool),
}

#[derive(Serialize)]
struct OpReport<'a> {
    op: &'a str,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    enum_name: Option<&'a str>,
    flags: Register,
    mask: Register,
    result: OpValue,
}

#[derive(Serialize)]
struct DescribeReport<'a> {
    #[serde(rename = "enum")]
    enum_name: &'a str,
    flags: Register,
    names: Vec<&'a str>,
    unknown: Register,
}

#[derive(Serialize)]
struct CheckReport<'a> {
    #[serde(rename = "enum")]
    enum_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Output settings shared by every command.
pub struct Output<'w> {
    pub json: bool,
    pub out: &'w mut dyn Write,
}

/// `5 (0x00000005)`; negative registers show their 32-bit pattern.
pub fn format_register(bits: Register) -> String {
    format!("{bits} ({bits:#010x})")
}

/// Resolve `--enum` against the config and reject invalid definitions.
pub fn select_enum(config: &BitmaskConfig, name: Option<&str>) -> Result<Option<FlagSet>, CliError> {
    let Some(name) = name else {
        return Ok(None);
    };
    let table = config
        .enums
        .get(name)
        .ok_or_else(|| CliError::UnknownEnum(name.to_string()))?;
    let definition = |source: FlagDefinitionError| CliError::Definition { enum_name: name.to_string(), source };
    let set = FlagSet::from_config(name, table).map_err(definition)?;
    set.validate().map_err(definition)?;
    Ok(Some(set))
}

pub fn run_op(
    op: Op,
    flags: &str,
    mask: &str,
    set: Option<&FlagSet>,
    output: &mut Output<'_>,
) -> Result<OpValue, CliError> {
    let flags = parse_operand(flags, set)?;
    let mask = parse_operand(mask, set)?;
    let result = op.eval(flags, mask);

    if output.json {
        let report = OpReport {
            op: op.label(),
            enum_name: set.map(|s| s.name.as_str()),
            flags,
            mask,
            result,
        };
        serde_json::to_writer(&mut *output.out, &report)?;
        writeln!(output.out)?;
    } else {
        match result {
            OpValue::Register(bits) => writeln!(output.out, "{}", format_register(bits))?,
            OpValue::Test(hit) => writeln!(output.out, "{hit}")?,
        }
    }
    Ok(result)
}

pub fn run_describe(flags: &str, set: Option<&FlagSet>, output: &mut Output<'_>) -> Result<(), CliError> {
    let set = set.ok_or_else(|| CliError::MissingEnum(flags.to_string()))?;
    let bits = parse_operand(flags, Some(set))?;
    let parts = set.decompose(bits);

    if output.json {
        let report = DescribeReport {
            enum_name: &set.name,
            flags: bits,
            names: parts.names,
            unknown: parts.unknown,
        };
        serde_json::to_writer(&mut *output.out, &report)?;
        writeln!(output.out)?;
        return Ok(());
    }

    let mut terms: Vec<String> = parts.names.iter().map(|n| n.to_string()).collect();
    if parts.unknown != register::EMPTY {
        terms.push(format!("{:#x}", parts.unknown));
    }
    if terms.is_empty() {
        terms.push("0".to_string());
    }
    writeln!(output.out, "{} = {}", format_register(bits), terms.join(" | "))?;
    Ok(())
}

/// Validate every configured enum. Reports all of them, then fails if any
/// is invalid.
pub fn run_check(config: &BitmaskConfig, output: &mut Output<'_>) -> Result<(), CliError> {
    let mut reports = Vec::new();
    for name in config.enum_names() {
        let table = &config.enums[name];
        let description = table.description.as_deref();
        let result = FlagSet::from_config(name, table).and_then(|set| {
            set.validate()?;
            Ok(set.flags.len())
        });
        match result {
            Ok(count) => {
                if !output.json {
                    writeln!(output.out, "{name}: ok ({count} flags)")?;
                }
                reports.push(CheckReport { enum_name: name, description, ok: true, error: None });
            }
            Err(e) => {
                if !output.json {
                    writeln!(output.out, "{name}: {e}")?;
                }
                reports.push(CheckReport {
                    enum_name: name,
                    description,
                    ok: false,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    if output.json {
        serde_json::to_writer(&mut *output.out, &reports)?;
        writeln!(output.out)?;
    } else if reports.is_empty() {
        writeln!(output.out, "no enums defined")?;
    }

    let invalid = reports.iter().filter(|r| !r.ok).count();
    if invalid > 0 {
        return Err(CliError::InvalidDefinitions(invalid));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::flag_set::tests::elemental_damage;

    fn capture<F>(json: bool, f: F) -> String
    where
        F: FnOnce(&mut Output<'_>) -> Result<(), CliError>,
    {
        let mut buf = Vec::new();
        let mut output = Output { json, out: &mut buf };
        f(&mut output).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn register_formatting() {
        assert_eq!(format_register(5), "5 (0x00000005)");
        assert_eq!(format_register(-1), "-1 (0xffffffff)");
    }

    #[test]
    fn add_with_names() {
        let set = elemental_damage();
        let text = capture(false, |o| {
            run_op(Op::Add, "0", "Fire|Lightning", Some(&set), o).map(|_| ())
        });
        assert_eq!(text, "5 (0x00000005)\n");
    }

    #[test]
    fn tests_print_booleans() {
        let set = elemental_damage();
        let any = capture(false, |o| {
            run_op(Op::HasAny, "5", "Poison|Lightning", Some(&set), o).map(|_| ())
        });
        let all = capture(false, |o| {
            run_op(Op::HasAll, "5", "Fire|Frost", Some(&set), o).map(|_| ())
        });
        assert_eq!(any, "true\n");
        assert_eq!(all, "false\n");
    }

    #[test]
    fn json_report() {
        let set = elemental_damage();
        let text = capture(true, |o| run_op(Op::Remove, "5", "Fire", Some(&set), o).map(|_| ()));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["op"], "remove");
        assert_eq!(value["enum"], "ElementalDamage");
        assert_eq!(value["result"], 4);

        let text = capture(true, |o| run_op(Op::HasAll, "7", "0", None, o).map(|_| ()));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["result"], true);
        assert!(value.get("enum").is_none());
    }

    #[test]
    fn describe_lists_names_and_unknown_bits() {
        let set = elemental_damage();
        let text = capture(false, |o| run_describe("0x25", Some(&set), o));
        assert_eq!(text, "37 (0x00000025) = Fire | Lightning | 0x20\n");

        let text = capture(false, |o| run_describe("0", Some(&set), o));
        assert_eq!(text, "0 (0x00000000) = None\n");
    }

    #[test]
    fn check_reports_every_enum() {
        let config = BitmaskConfig::parse(
            r#"
            [enums.Good]
            flags = { A = 1, B = 2 }
            [enums.Bad]
            flags = { A = 1, AB = 3 }
            "#,
            Path::new("bitmask.toml"),
        )
        .unwrap();

        let mut buf = Vec::new();
        let mut output = Output { json: false, out: &mut buf };
        let err = run_check(&config, &mut output).unwrap_err();
        assert!(matches!(err, CliError::InvalidDefinitions(1)));
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "Bad: flag AB = 0x3 has more than one bit set\nGood: ok (2 flags)\n");
    }

    #[test]
    fn select_enum_rejects_unknown_and_invalid() {
        let config = BitmaskConfig::parse(
            "[enums.Bad]\nflags = { A = 1, B = 1 }\n",
            Path::new("bitmask.toml"),
        )
        .unwrap();
        assert!(matches!(select_enum(&config, Some("Nope")), Err(CliError::UnknownEnum(_))));
        assert!(matches!(select_enum(&config, Some("Bad")), Err(CliError::Definition { .. })));
        assert!(select_enum(&config, None).unwrap().is_none());
    }
}
