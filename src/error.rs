//! Error types for the shift ledger.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure that can occur at the input, configuration and
//! persistence boundaries. Pay calculations themselves never fail.

use thiserror::Error;

/// The main error type for the shift ledger.
///
/// # Example
///
/// ```
/// use shift_ledger::error::LedgerError;
///
/// let error = LedgerError::InvalidTimeFormat {
///     value: "25:00".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid time of day '25:00': expected HH:MM");
/// ```
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A time-of-day string was not a valid `HH:MM` value.
    #[error("Invalid time of day '{value}': expected HH:MM")]
    InvalidTimeFormat {
        /// The rejected input.
        value: String,
    },

    /// A calendar date could not be constructed.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// A description of what made the date invalid.
        message: String,
    },

    /// A shift was invalid or contained inconsistent data.
    #[error("Invalid shift '{shift_id}': {message}")]
    InvalidShift {
        /// The ID of the invalid shift.
        shift_id: String,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// A transaction was invalid or contained inconsistent data.
    #[error("Invalid transaction '{transaction_id}': {message}")]
    InvalidTransaction {
        /// The ID of the invalid transaction.
        transaction_id: String,
        /// A description of what made the transaction invalid.
        message: String,
    },

    /// A user configuration field held an unusable value.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An entity referenced by id does not exist in the ledger.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// The kind of entity (e.g. "shift", "tag").
        entity: &'static str,
        /// The id that was looked up.
        id: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The document storage could not be read or written.
    #[error("Storage error for '{key}': {message}")]
    StorageError {
        /// The storage key involved.
        key: String,
        /// A description of the I/O failure.
        message: String,
    },

    /// The persisted document could not be parsed or migrated.
    #[error("Failed to parse ledger document: {message}")]
    DocumentParse {
        /// A description of the parse error.
        message: String,
    },

    /// The persisted document was written by a newer version of the schema.
    #[error("Unsupported schema version {found} (newest supported is {supported})")]
    UnsupportedSchemaVersion {
        /// The version found in the document.
        found: u64,
        /// The newest version this build understands.
        supported: u64,
    },
}

/// A type alias for Results that return LedgerError.
pub type LedgerResult<T> = Result<T, LedgerError>;
