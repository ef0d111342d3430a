//! Error types for san-traffic.

use thiserror::Error;

/// Errors raised while building or running a traffic generator.
#[derive(Debug, Error)]
pub enum TrafficError {
    #[error("load schedule must contain at least one phase")]
    EmptySchedule,

    #[error("traffic configuration error: {0}")]
    Config(String),
}

/// Alias for `Result<T, TrafficError>`.
pub type TrafficResult<T> = Result<T, TrafficError>;
