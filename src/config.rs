//! Application configuration file support.
//!
//! The demo ships its survey exports as static assets; the config names
//! the asset root and the hue inventory so deployments can relocate or
//! extend either without code changes.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::domain::HUE_ORDER;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
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

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub assets: AssetSettings,
    #[serde(default)]
    pub survey: SurveySettings,
}

/// Static asset settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetSettings {
    /// Directory the survey CSV exports are served from.
    #[serde(default = "default_asset_root")]
    pub root: PathBuf,
}

/// Survey inventory settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveySettings {
    /// Hues with a per-hue export available.
    #[serde(default = "default_hues")]
    pub hues: Vec<i64>,
}

fn default_asset_root() -> PathBuf {
    PathBuf::from("public")
}

fn default_hues() -> Vec<i64> {
    HUE_ORDER.to_vec()
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            root: default_asset_root(),
        }
    }
}

impl Default for SurveySettings {
    fn default() -> Self {
        Self {
            hues: default_hues(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<AppConfig, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
