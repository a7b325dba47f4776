//! Configuration loading for pharmval.
//! Reads pharmval.toml from the current directory or the path in PHARMVAL_CONFIG.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "pharmval.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub valuation: ValuationConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    File,
    Memory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,
    #[serde(default = "default_store_path")]
    pub path: String,
}

impl StoreBackend {
    /// Whether saved valuations outlive the process.
    pub fn is_persistent(self) -> bool {
        matches!(self, StoreBackend::File)
    }
}

fn default_store_path() -> String { "./data/valuations".to_string() }

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            path: default_store_path(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValuationConfig {
    /// Discounting reference year; the current UTC year when unset.
    pub current_year: Option<i32>,
    /// Abort when the validation pass reports warnings.
    #[serde(default)]
    pub strict: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// JSON array of patent / exclusivity records.
    pub loe_records: Option<String>,
    /// JSON array of trial metadata.
    pub trials: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String { "pharmval=debug,info".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_log_filter() }
    }
}

#[cfg(test)]
mod tests;

impl Config {
    /// Resolve the config path: explicit argument, else pharmval.toml.
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    /// Load configuration. A missing file yields defaults so the CLI works
    /// without any setup; a malformed file is an error.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Reference year for discounting.
    pub fn current_year(&self) -> i32 {
        self.valuation
            .current_year
            .unwrap_or_else(|| Utc::now().year())
    }
}
