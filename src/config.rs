//! Configuration loading
//!
//! Reads `config.toml` from the platform config directory (or an explicit path).
//! A broken config never stops the app: defaults are used and a warning is
//! returned so the UI can surface it.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::TripqError;

pub mod types;

pub use types::{Config, DEFAULT_ENDPOINT, EndpointConfig, UiConfig};

/// Result of loading the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigResult {
    pub config: Config,
    /// Message to show the user when the file could not be used
    pub warning: Option<String>,
}

impl ConfigResult {
    fn defaults() -> Self {
        Self {
            config: Config::default(),
            warning: None,
        }
    }

    fn defaults_with_warning(warning: String) -> Self {
        Self {
            config: Config::default(),
            warning: Some(warning),
        }
    }
}

/// Default location: `<config_dir>/tripq/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tripq").join("config.toml"))
}

/// Load configuration from `path`, or from the default location when `None`
///
/// A missing default file is silent; a missing explicit file or an unparseable
/// one yields defaults plus a warning.
pub fn load_config(path: Option<&Path>) -> ConfigResult {
    match path {
        Some(path) => load_from_path(path, true),
        None => match default_config_path() {
            Some(path) => load_from_path(&path, false),
            None => ConfigResult::defaults(),
        },
    }
}

fn load_from_path(path: &Path, explicit: bool) -> ConfigResult {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound && !explicit => {
            log::debug!("No config file at {}, using defaults", path.display());
            return ConfigResult::defaults();
        }
        Err(e) => {
            log::warn!("Failed to read config {}: {}", path.display(), e);
            return ConfigResult::defaults_with_warning(format!(
                "Could not read {}, using defaults",
                path.display()
            ));
        }
    };

    match parse_config(&content) {
        Ok(config) => {
            log::debug!("Loaded config from {}", path.display());
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(e) => {
            log::warn!("{} ({})", e, path.display());
            ConfigResult::defaults_with_warning("Invalid config, using defaults".to_string())
        }
    }
}

/// Parse TOML config content
pub fn parse_config(content: &str) -> Result<Config, TripqError> {
    toml::from_str(content).map_err(|e| TripqError::Config(e.message().to_string()))
}
