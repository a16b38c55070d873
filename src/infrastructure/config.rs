//! Snippet box settings and their TOML form

use crate::domain::{FilterMode, DEFAULT_EXPORT_FILENAME};
use crate::error::{Result, SnipboxError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub default_filter: FilterMode,
    #[serde(default = "default_export_filename")]
    pub export_filename: String,
    pub created: DateTime<Utc>,
}

fn default_export_filename() -> String {
    DEFAULT_EXPORT_FILENAME.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_filter: FilterMode::default(),
            export_filename: default_export_filename(),
            created: Utc::now(),
        }
    }
}

/// Settings addressable from `snipbox config`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    DefaultFilter,
    ExportFilename,
    Created,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 3] = [
        ConfigKey::DefaultFilter,
        ConfigKey::ExportFilename,
        ConfigKey::Created,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::DefaultFilter => "default_filter",
            ConfigKey::ExportFilename => "export_filename",
            ConfigKey::Created => "created",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConfigKey {
    type Err = SnipboxError;

    fn from_str(s: &str) -> Result<Self> {
        ConfigKey::ALL
            .into_iter()
            .find(|key| key.name() == s)
            .ok_or_else(|| {
                SnipboxError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: default_filter, export_filename, created",
                    s
                ))
            })
    }
}

impl Config {
    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| SnipboxError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    pub fn render(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Current value of `key` as shown to the user
    pub fn get(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::DefaultFilter => self.default_filter.to_string(),
            ConfigKey::ExportFilename => self.export_filename.clone(),
            ConfigKey::Created => self.created.to_rfc3339(),
        }
    }

    /// Change `key` from its user-facing string form
    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<()> {
        match key {
            ConfigKey::DefaultFilter => {
                self.default_filter = value.parse().map_err(SnipboxError::Config)?;
            }
            ConfigKey::ExportFilename => {
                // the export lands inside the chosen output directory
                if value.is_empty() || value.contains(['/', '\\']) {
                    return Err(SnipboxError::Config(format!(
                        "Invalid export filename: '{}'. Use a plain file name such as snippets.txt",
                        value
                    )));
                }
                self.export_filename = value.to_string();
            }
            ConfigKey::Created => {
                return Err(SnipboxError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
        }
        Ok(())
    }
}
