//! Error types for san-model.

use san_core::SanError;
use san_traffic::TrafficError;
use thiserror::Error;

/// Errors raised while setting up or running a simulation pass.
///
/// Per-sample saturation is not an error — it is a modeled condition carried
/// by `QueueState::dropped`.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error(transparent)]
    Core(#[from] SanError),

    #[error(transparent)]
    Traffic(#[from] TrafficError),
}

/// Alias for `Result<T, ModelError>`.
pub type ModelResult<T> = Result<T, ModelError>;
