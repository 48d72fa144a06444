//! Error types for the vacation ledger.
//!
//! Row-level problems found while importing or validating vacations are
//! reported as values (see [`crate::validation::ValidationReport`]). This
//! module covers the operational failures: configuration, storage and
//! unreadable import text.

use thiserror::Error;

/// The main error type for the vacation ledger.
///
/// # Example
///
/// ```
/// use vacation_ledger::error::LedgerError;
///
/// let error = LedgerError::ConfigNotFound {
///     path: "/missing/ledger.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/ledger.yaml");
/// ```
#[derive(Debug, Error)]
pub enum LedgerError {
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

    /// A month outside 1..=12 was requested.
    #[error("Invalid month {month} for year {year}")]
    InvalidMonth {
        /// The requested year.
        year: i32,
        /// The requested month.
        month: u32,
    },

    /// The blob store could not read or write a named blob.
    #[error("Storage error for blob '{name}': {message}")]
    Storage {
        /// The blob name.
        name: String,
        /// A description of the storage failure.
        message: String,
    },

    /// A value could not be serialized for storage.
    #[error("Failed to serialize blob '{name}': {message}")]
    Serialization {
        /// The blob name.
        name: String,
        /// A description of the serialization failure.
        message: String,
    },

    /// Pasted text could not be read as delimited data.
    #[error("Import error: {message}")]
    Import {
        /// A description of the import failure.
        message: String,
    },
}

/// A type alias for Results that return LedgerError.
pub type LedgerResult<T> = Result<T, LedgerError>;
