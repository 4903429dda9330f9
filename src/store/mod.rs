//! Persistence for the ledger document.
//!
//! The whole ledger is one JSON document stored under a single key. This
//! module provides the storage backends, the schema migration applied when
//! a document is loaded, and [`LedgerStore`], which writes the document
//! back after every mutation.

mod ledger_store;
mod migration;
mod storage;

pub use ledger_store::LedgerStore;
pub use migration::{LEGACY_SCHEMA_VERSION, migrate_document};
pub use storage::{DocumentStorage, FileStorage, MemoryStorage};
