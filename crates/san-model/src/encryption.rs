//! Encryption overhead model.
//!
//! AES-256 processing is modeled as two independent effects:
//!
//! - a CPU delay linear in the data volume: 0.15 ms per MB processed;
//! - a fixed 2% payload size inflation from per-block padding and framing.
//!
//! The CPU delay is *added* to the network delay (never multiplied into it);
//! the inflation factor applies only to payload size.

/// CPU processing cost in seconds per MB (0.15 ms/MB).
pub const CPU_COST_S_PER_MB: f64 = 0.000_15;

/// Encrypted payload size relative to plaintext.
pub const SIZE_INFLATION_FACTOR: f64 = 1.02;

/// Encryption cost for one traffic sample.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EncryptionImpact {
    /// CPU processing delay in seconds (`load_MB × 0.15 ms/MB`).
    pub cpu_delay_s: f64,
    /// Payload size multiplier (1.02 when enabled, 1.0 when disabled).
    pub inflation_factor: f64,
}

impl EncryptionImpact {
    /// Impact of encrypting `offered_mb_s` of traffic, or the zero impact
    /// when encryption is disabled.
    pub fn for_load(offered_mb_s: f64, enabled: bool) -> EncryptionImpact {
        if !enabled {
            return EncryptionImpact::disabled();
        }
        EncryptionImpact {
            cpu_delay_s:      offered_mb_s * CPU_COST_S_PER_MB,
            inflation_factor: SIZE_INFLATION_FACTOR,
        }
    }

    /// The no-op impact: zero delay, unit inflation.
    pub fn disabled() -> EncryptionImpact {
        EncryptionImpact { cpu_delay_s: 0.0, inflation_factor: 1.0 }
    }
}
