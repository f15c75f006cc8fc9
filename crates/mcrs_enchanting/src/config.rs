use crate::enchanter::{DEFAULT_MAX_ENCHANTMENTS, Enchanter};
use crate::rules::{RuleTable, RuleTableError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Enchanting settings, typically read from a JSON file. Missing fields keep
/// their defaults, so `{}` is the vanilla configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnchantingConfig {
    pub max_enchantments: usize,
    pub rules: RuleTable,
}

impl Default for EnchantingConfig {
    fn default() -> Self {
        Self {
            max_enchantments: DEFAULT_MAX_ENCHANTMENTS,
            rules: RuleTable::VANILLA,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(String),
    #[error("invalid rule table: {0}")]
    Rules(#[from] RuleTableError),
}

impl EnchantingConfig {
    /// Parses and validates a configuration; a rule table that could yield an
    /// empty candidate or an undrawable pool is rejected.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Json(e.to_string()))?;
        config.rules.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            max_enchantments = config.max_enchantments,
            "Loaded enchanting configuration"
        );
        Ok(config)
    }

    pub fn enchanter(&self) -> Enchanter<'_> {
        Enchanter::new(&self.rules).with_max_enchantments(self.max_enchantments)
    }
}
