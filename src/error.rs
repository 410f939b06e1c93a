//! Error types for annonce.
//!
//! The engine itself has no recoverable-error states: absent attributes and
//! zero-match patterns are policy, not failures, and annotation always
//! terminates with a well-formed (possibly empty) span list. Everything in
//! this enum belongs to the I/O boundary around the engine.

use thiserror::Error;

/// Result type for annonce operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for annonce boundary operations (ingest, export, validation).
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required column is missing from the input CSV header.
    #[error("missing required column {0:?} in input CSV")]
    MissingColumn(String),

    /// A line of a JSONL file could not be parsed as a record.
    #[error("invalid record on line {line}: {reason}")]
    InvalidRecord {
        /// 1-based line number in the file.
        line: usize,
        /// What went wrong on that line.
        reason: String,
    },
}

impl Error {
    /// Create a missing-column error.
    pub fn missing_column(name: impl Into<String>) -> Self {
        Error::MissingColumn(name.into())
    }

    /// Create an invalid-record error.
    pub fn invalid_record(line: usize, reason: impl Into<String>) -> Self {
        Error::InvalidRecord {
            line,
            reason: reason.into(),
        }
    }
}
