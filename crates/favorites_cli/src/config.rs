//! Configuration management for the favorites CLI.
//!
//! The configuration is a small optional TOML file: when it is absent the
//! CLI runs on defaults. It currently carries one setting, the directory
//! holding the favorites data file. The `--data-dir` flag overrides the
//! configured value, which in turn overrides the platform default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::Error;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "config.toml";

/// Directory name used under the platform config and data directories
pub const APP_DIR_NAME: &str = "gh-favorites";

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Configuration structure for the favorites CLI application.
///
/// # Example TOML Configuration
///
/// ```toml
/// [storage]
/// data_dir = "/home/me/.local/share/gh-favorites"
/// ```
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Storage settings
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Storage-related configuration values.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the favorites data file. Defaults to the platform
    /// data directory when unset.
    pub data_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Loads configuration from a TOML file at the specified path.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the file does not exist, cannot be read,
    /// or contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, Error> {
        debug!("Loading configuration from {:?}", path);

        if !path.exists() {
            return Err(Error::Config(format!(
                "Configuration file not found: {:?}",
                path
            )));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read configuration file: {}", e)))?;

        let config: AppConfig = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse configuration file: {}", e)))?;

        Ok(config)
    }

    /// Loads configuration, tolerating an absent file at the default
    /// location.
    ///
    /// An explicitly given path must exist; the default path is tried and
    /// silently skipped when missing.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` for a missing explicit path or an unreadable
    /// or unparseable file at either location.
    pub fn load_or_default(explicit_path: Option<&Path>) -> Result<Self, Error> {
        match explicit_path {
            Some(path) => Self::load(path),
            None => {
                let path = default_config_path();
                if path.exists() {
                    Self::load(&path)
                } else {
                    debug!("No configuration file at {:?}, using defaults", path);
                    Ok(Self::default())
                }
            }
        }
    }
}

/// Returns the default configuration file path under the platform config
/// directory.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join(DEFAULT_CONFIG_FILENAME)
}

/// Resolves the directory holding the favorites data file.
///
/// Precedence: the `--data-dir` flag, then the configuration file, then the
/// platform data directory.
pub fn resolve_data_dir(flag: Option<&Path>, config: &AppConfig) -> PathBuf {
    if let Some(dir) = flag {
        return dir.to_path_buf();
    }
    if let Some(dir) = &config.storage.data_dir {
        return dir.clone();
    }
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}
