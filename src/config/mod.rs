//! Configuration loading for the shift ledger.
//!
//! This module loads the storage location, the default user settings and
//! the default tags from YAML files. The defaults seed a brand new ledger
//! and fill gaps when an older document is migrated.
//!
//! # Example
//!
//! ```no_run
//! use shift_ledger::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap().into_config();
//! println!("Ledger key: {}", config.storage().key);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, AppSettings, DEFAULT_STORAGE_KEY, StorageConfig, TagsConfig};
