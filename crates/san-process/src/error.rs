//! Error types for san-process.

use thiserror::Error;

/// Errors raised while reading, normalizing, or re-writing record sets.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Alias for `Result<T, ProcessError>`.
pub type ProcessResult<T> = Result<T, ProcessError>;
