//! Error type definitions.
//!
//! This module defines the error types surfaced by the record store, the
//! comparison engine and application initialization.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Errors raised by the comparison engine.
///
/// A missing identifier is never an error: it is reported inline as
/// `found = false` on the query result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The caller supplied an unusable query (zero identifier, empty batch).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The derived indices disagree with the record store.
    ///
    /// This indicates an integration bug (duplicate identifiers, or an index
    /// left stale by an uncoordinated mutation), not a normal runtime condition.
    #[error("Inconsistent index for transaction {id}: {detail}")]
    InconsistentIndex {
        /// Identifier whose lookups disagreed
        id: u64,
        /// What disagreed
        detail: String,
    },
}

/// Errors raised while building or mutating the record store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Two records share an identifier and the store rejects duplicates.
    #[error("Duplicate transaction identifier: {0}")]
    DuplicateIdentifier(u64),

    /// A record carries an `id` that is not a positive integer.
    #[error("Invalid transaction identifier: {0}")]
    InvalidIdentifier(String),

    /// No record with this identifier exists.
    #[error("Transaction with ID {0} not found")]
    NotFound(u64),

    /// A required field is missing from a new record.
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// A record entry is not a JSON object.
    #[error("Transaction entry is not a JSON object")]
    NotAnObject,
}

/// Errors reading a dataset file.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be read.
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a JSON array of objects.
    #[error("Invalid JSON in dataset: {0}")]
    Json(#[from] serde_json::Error),
}
