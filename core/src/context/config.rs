//! Tracker configuration
//!
//! This module re-exports the shared config type from zulrah-types and
//! provides persistence for it.

use std::path::{Path, PathBuf};

use tracing::warn;

pub use zulrah_types::TrackerConfig;

use super::ConfigError;

const APP_NAME: &str = "zulrah";
const CONFIG_NAME: &str = "config";

/// Extension trait for TrackerConfig persistence
pub trait TrackerConfigExt: Sized {
    /// Load the user config, falling back to defaults on any error
    fn load() -> Self;
    fn try_load() -> Result<Self, ConfigError>;
    fn save(&self) -> Result<(), ConfigError>;
    fn load_from(path: &Path) -> Result<Self, ConfigError>;
    fn save_to(&self, path: &Path) -> Result<(), ConfigError>;
    fn config_path() -> Result<PathBuf, ConfigError>;
}

impl TrackerConfigExt for TrackerConfig {
    fn load() -> Self {
        Self::try_load().unwrap_or_else(|err| {
            warn!(error = %err, "Using default tracker configuration");
            Self::default()
        })
    }

    fn try_load() -> Result<Self, ConfigError> {
        Ok(confy::load(APP_NAME, CONFIG_NAME)?)
    }

    fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, CONFIG_NAME, self).map_err(ConfigError::Save)
    }

    fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Ok(confy::load_path(path)?)
    }

    fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        confy::store_path(path, self).map_err(ConfigError::Save)
    }

    fn config_path() -> Result<PathBuf, ConfigError> {
        confy::get_configuration_file_path(APP_NAME, CONFIG_NAME).map_err(ConfigError::Locate)
    }
}
