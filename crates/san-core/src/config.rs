//! Top-level run configuration.

use crate::error::{SanError, SanResult};

/// Parameters of one simulation run.
///
/// Validated once, up front, by [`RunConfig::validate`] — model code assumes
/// a valid configuration and never re-checks.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    /// Total simulated duration in seconds.
    pub duration_secs: f64,

    /// Seconds per discrete step.  Default: 1.0.
    pub step_secs: f64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Whether the encryption overhead model is applied.
    pub encryption_enabled: bool,
}

impl RunConfig {
    /// A run with 1-second steps.
    pub fn new(duration_secs: f64, seed: u64, encryption_enabled: bool) -> Self {
        Self { duration_secs, step_secs: 1.0, seed, encryption_enabled }
    }

    /// Fail fast on parameters the model cannot run with.
    pub fn validate(&self) -> SanResult<()> {
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return Err(SanError::Config(format!(
                "duration must be a positive finite number of seconds, got {}",
                self.duration_secs
            )));
        }
        if !self.step_secs.is_finite() || self.step_secs <= 0.0 {
            return Err(SanError::Config(format!(
                "step size must be a positive finite number of seconds, got {}",
                self.step_secs
            )));
        }
        Ok(())
    }

    /// Number of discrete steps in the run (rounds up).
    #[inline]
    pub fn total_steps(&self) -> u64 {
        (self.duration_secs / self.step_secs).ceil() as u64
    }
}
