//! TOML defaults for the command-line front end.
//!
//! ```toml
//! seed = 42
//! log_scope = "nightly-draw"
//! hash_range = 100
//! ```
//!
//! Every key is optional. Library functions never read this; it only feeds
//! defaults to the `toolbelt` binary.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolbeltConfig {
    /// Master seed for reproducible runs. A fresh one is drawn when absent.
    pub seed: Option<u64>,
    /// Scope label printed on log lines.
    pub log_scope: Option<String>,
    /// Default bucket count for `hash`.
    pub hash_range: Option<u32>,
}

/// Errors from loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ToolbeltConfig {
    /// Load from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
