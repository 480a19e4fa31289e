//! Error types and result handling for pg-copy-json.
//!
//! This module defines the main error type [`Error`] and a convenience
//! [`Result`] type alias used throughout the crate.

use thiserror::Error;

/// The main error type for pg-copy-json operations.
///
/// Malformed input never produces an error: unrecognized lines are
/// skipped and data rows are passed through as-is. Only the surrounding
/// I/O and serialization can fail.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error reading the input stream or writing records.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error when encoding a record.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A convenient Result type alias for pg-copy-json operations.
///
/// This is equivalent to `std::result::Result<T, pg_copy_json::Error>`.
pub type Result<T> = std::result::Result<T, Error>;
