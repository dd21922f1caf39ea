//! Core error types for the valuation engine.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! (from SQL drivers, ORMs, etc.) are converted to these types by the storage
//! layer before they reach the engine.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the valuation engine.
///
/// Data-quality conditions (missing ISIN, absent quotes, detected fund
/// cycles, ...) are deliberately NOT errors: they resolve the affected
/// instrument to zero and are reported through the event sink instead.
#[derive(Error, Debug)]
pub enum Error {
    /// The investor the valuation was requested for does not exist.
    ///
    /// Kept as a distinct variant so callers can map it to a 404-equivalent
    /// without string matching.
    #[error("Investor with ID {0} not found")]
    InvestorNotFound(i32),

    #[error("Repository operation failed: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Database-agnostic error type for repository operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert storage-specific errors into this format.
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Failed to establish a connection to the backing store.
    #[error("Failed to connect to storage: {0}")]
    ConnectionFailed(String),

    /// A query failed to execute.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Internal/unexpected storage error.
    #[error("Internal storage error: {0}")]
    Internal(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
