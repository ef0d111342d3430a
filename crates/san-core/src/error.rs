//! Pipeline base error type.
//!
//! Sub-crates define their own error enums and either convert into `SanError`
//! via `From` impls or wrap it as one variant.  Both patterns are acceptable;
//! prefer whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `san-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum SanError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `san-*` crates.
pub type SanResult<T> = Result<T, SanError>;
