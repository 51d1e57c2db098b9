//! Declarative whitelist configuration.
//!
//! A whitelist can be kept next to the service config instead of in code:
//!
//! ```toml
//! columns = ["status", "created_at"]
//!
//! [aliases]
//! author = "users.name"
//! ```

use crate::column::{is_valid_column_name, is_valid_column_reference};
use crate::error::ConfigError;
use crate::whitelist::ColumnWhitelist;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Serializable description of a [`ColumnWhitelist`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct WhitelistConfig {
    /// Columns allowed under their own name.
    #[serde(default)]
    pub columns: Vec<String>,
    /// Columns allowed under a different SQL reference (`column -> table.column`).
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

impl WhitelistConfig {
    /// Parse a TOML document.
    ///
    /// ```
    /// use mik_lookup::WhitelistConfig;
    ///
    /// let config = WhitelistConfig::from_toml_str(r#"
    ///     columns = ["status"]
    ///     [aliases]
    ///     author = "users.name"
    /// "#).unwrap();
    /// assert_eq!(config.columns, ["status"]);
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Check every name without building the whitelist.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for column in self.columns.iter().chain(self.aliases.keys()) {
            if !is_valid_column_name(column) {
                return Err(ConfigError::InvalidColumn {
                    column: column.clone(),
                });
            }
            if !seen.insert(column.as_str()) {
                return Err(ConfigError::DuplicateColumn {
                    column: column.clone(),
                });
            }
        }
        for (column, alias) in &self.aliases {
            if !is_valid_column_reference(alias) {
                return Err(ConfigError::InvalidAlias {
                    column: column.clone(),
                    alias: alias.clone(),
                });
            }
        }
        Ok(())
    }
}

impl TryFrom<WhitelistConfig> for ColumnWhitelist {
    type Error = ConfigError;

    fn try_from(config: WhitelistConfig) -> Result<Self, Self::Error> {
        config.validate()?;
        let whitelist = config
            .columns
            .into_iter()
            .fold(Self::new(), |wl, column| wl.allow(column));
        Ok(config
            .aliases
            .into_iter()
            .fold(whitelist, |wl, (column, alias)| wl.alias(column, alias)))
    }
}
