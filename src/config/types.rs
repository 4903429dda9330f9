//! Configuration types for the shift ledger.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::{AppData, Tag, UserConfig, default_tags};

/// Storage key the ledger document is kept under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "manage-app-data";

/// Where the ledger document is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StorageConfig {
    /// Directory holding document files.
    #[serde(default = "default_directory")]
    pub directory: String,
    /// Key the document is stored under; file storage appends `.json`.
    #[serde(default = "default_key")]
    pub key: String,
}

fn default_directory() -> String {
    "./data".to_string()
}

fn default_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            key: default_key(),
        }
    }
}

/// Contents of `app.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    /// Persistence settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// User settings given to a brand new ledger.
    #[serde(default)]
    pub defaults: UserConfig,
}

/// Contents of `tags.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct TagsConfig {
    /// Tags a brand new ledger starts with.
    pub tags: Vec<Tag>,
}

/// The complete ledger configuration.
///
/// Combines storage settings with the defaults used to seed a new ledger
/// and to fill gaps when an older document is migrated.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    storage: StorageConfig,
    user_defaults: UserConfig,
    default_tags: Vec<Tag>,
}

impl AppConfig {
    /// Creates a new configuration from its parts.
    pub fn new(storage: StorageConfig, user_defaults: UserConfig, default_tags: Vec<Tag>) -> Self {
        Self {
            storage,
            user_defaults,
            default_tags,
        }
    }

    /// Returns the storage settings.
    pub fn storage(&self) -> &StorageConfig {
        &self.storage
    }

    /// Returns the user settings for a new ledger.
    pub fn user_defaults(&self) -> &UserConfig {
        &self.user_defaults
    }

    /// Returns the tags for a new ledger.
    pub fn default_tags(&self) -> &[Tag] {
        &self.default_tags
    }

    /// Builds an empty ledger document seeded with the configured defaults.
    pub fn fresh_document(&self) -> AppData {
        AppData::new(self.user_defaults.clone(), self.default_tags.clone())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(StorageConfig::default(), UserConfig::default(), default_tags())
    }
}
