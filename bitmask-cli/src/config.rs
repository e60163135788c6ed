// Configuration types for the bitmask CLI, deserialized from bitmask.toml.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::CliError;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG: &str = "bitmask.toml";

/// Top-level config file.
///
/// ```toml
/// [enums.ElementalDamage]
/// description = "Lingering damage types"
/// flags = { None = 0, Fire = 1, Frost = 2, Lightning = 4, Poison = 8 }
/// ```
#[derive(Deserialize, Debug, Default)]
pub struct BitmaskConfig {
    #[serde(default)]
    pub enums: HashMap<String, EnumConfig>,
}

/// One named flag enumeration.
#[derive(Deserialize, Debug)]
pub struct EnumConfig {
    #[serde(default)]
    pub description: Option<String>,
    /// Flag name to value. Wide integers so out-of-range values can be
    /// reported instead of failing to parse.
    pub flags: HashMap<String, i64>,
}

impl BitmaskConfig {
    pub fn parse(text: &str, path: &Path) -> Result<Self, CliError> {
        toml::from_str(text).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load an explicit config path (must exist), or the default path if it
    /// exists, or an empty config.
    pub fn load(explicit: Option<&Path>) -> Result<Self, CliError> {
        let path = match explicit {
            Some(path) => path,
            None => {
                let default = Path::new(DEFAULT_CONFIG);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };
        let text = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// Enum names in sorted order.
    pub fn enum_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.enums.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
