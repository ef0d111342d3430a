//! Error types for san-advisory.

use thiserror::Error;

/// Why an advisory call produced no insight.
///
/// All variants are recoverable: the record set the caller holds stays valid,
/// and the expected handling is to render without the insight panel.
#[derive(Debug, Error)]
pub enum AdvisoryError {
    #[error("advisory service unavailable: no API key configured")]
    MissingKey,

    #[error("advisory service unavailable: {0}")]
    Http(#[from] reqwest::Error),

    #[error("advisory service returned a malformed response: {0}")]
    Malformed(String),

    #[error("failed to serialize the record snippet: {0}")]
    Snippet(#[from] csv::Error),
}

/// Alias for `Result<T, AdvisoryError>`.
pub type AdvisoryResult<T> = Result<T, AdvisoryError>;
