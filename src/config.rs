//! Configuration Module
//! Loader and logging settings, read from an optional TOML file and the environment.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable pointing at a TOML config file.
pub const CONFIG_PATH_ENV: &str = "AUTO_EDA_CONFIG";
const LOG_LEVEL_ENV: &str = "AUTO_EDA_LOG_LEVEL";
const EXCEL_ENABLED_ENV: &str = "AUTO_EDA_EXCEL_ENABLED";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub loader: LoaderConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Rows scanned when inferring CSV column types
    pub infer_schema_length: usize,

    /// Allow the Excel codec; only meaningful when built with the `excel` feature
    pub excel_enabled: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            infer_schema_length: 10000,
            excel_enabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when RUST_LOG is unset
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// File named by `AUTO_EDA_CONFIG` (defaults when unset), then environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let config = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::load_from_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_env_overrides(|key| std::env::var(key).ok()))
    }

    fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(level) = lookup(LOG_LEVEL_ENV) {
            self.logging.level = level;
        }

        if let Some(enabled) = lookup(EXCEL_ENABLED_ENV) {
            match enabled.to_lowercase().as_str() {
                "1" | "true" | "yes" => self.loader.excel_enabled = true,
                "0" | "false" | "no" => self.loader.excel_enabled = false,
                _ => {}
            }
        }

        self
    }
}
