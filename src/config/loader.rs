//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading ledger
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{LedgerError, LedgerResult};

use super::types::{AppConfig, AppSettings, TagsConfig};

/// Loads and provides access to ledger configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── app.yaml   # Storage location and default user settings
/// └── tags.yaml  # Tags a new ledger starts with
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_ledger::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Pay day: {}", loader.config().user_defaults().pay_day);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The default user settings fail validation
    pub fn load<P: AsRef<Path>>(path: P) -> LedgerResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<AppSettings>(&path.join("app.yaml"))?;
        let tags = Self::load_yaml::<TagsConfig>(&path.join("tags.yaml"))?;

        settings.defaults.validate()?;

        info!(
            directory = %path.display(),
            storage_key = %settings.storage.key,
            tag_count = tags.tags.len(),
            "loaded ledger configuration"
        );

        Ok(Self {
            config: AppConfig::new(settings.storage, settings.defaults, tags.tags),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> LedgerResult<T> {
        let path_str = path.display().to_string();
        debug!(path = %path_str, "reading configuration file");

        let content = fs::read_to_string(path).map_err(|_| LedgerError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| LedgerError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> AppConfig {
        self.config
    }
}
