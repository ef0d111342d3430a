//! Error types for san-output.

use thiserror::Error;

/// Errors that can occur when persisting simulation records.
///
/// These are recoverable from the caller's perspective: the record set that
/// failed to persist is still valid and usable.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
