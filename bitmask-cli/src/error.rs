// Error types for the bitmask CLI.

use std::fmt;
use std::path::PathBuf;

use bitmask_flags::FlagDefinitionError;

#[derive(Debug)]
pub enum CliError {
    ConfigRead { path: PathBuf, source: std::io::Error },
    ConfigParse { path: PathBuf, source: toml::de::Error },
    UnknownEnum(String),
    UnknownFlag { enum_name: String, flag: String },
    /// A flag name was used without `--enum`.
    MissingEnum(String),
    InvalidValue(String),
    Definition { enum_name: String, source: FlagDefinitionError },
    /// `check` found this many invalid enums.
    InvalidDefinitions(usize),
    Output(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigRead { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            CliError::ConfigParse { path, source } => {
                write!(f, "failed to parse {}: {source}", path.display())
            }
            CliError::UnknownEnum(name) => write!(f, "unknown enum: {name}"),
            CliError::UnknownFlag { enum_name, flag } => {
                write!(f, "unknown flag {flag} in enum {enum_name}")
            }
            CliError::MissingEnum(flag) => {
                write!(f, "flag name {flag} needs --enum to resolve it")
            }
            CliError::InvalidValue(text) => write!(f, "invalid register value: {text}"),
            CliError::Definition { enum_name, source } => {
                write!(f, "invalid enum {enum_name}: {source}")
            }
            CliError::InvalidDefinitions(count) => write!(f, "{count} invalid enum(s)"),
            CliError::Output(e) => write!(f, "failed to write output: {e}"),
            CliError::Json(e) => write!(f, "failed to serialize output: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::ConfigRead { source, .. } => Some(source),
            CliError::ConfigParse { source, .. } => Some(source),
            CliError::Definition { source, .. } => Some(source),
            CliError::Output(e) => Some(e),
            CliError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Output(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}
