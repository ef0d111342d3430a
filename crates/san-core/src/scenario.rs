//! Network scenarios under comparison.
//!
//! A `Scenario` describes one storage-area-network configuration: a machine
//! name (used in persisted rows), a human-readable label (used by the
//! presentation layer), and a link capacity.  The two canonical scenarios —
//! legacy 1 Gbps Ethernet and 16 Gbps Fibre Channel — are provided as
//! constructors so every run in the repo compares the same pair.

use std::fmt;

use crate::error::{SanError, SanResult};
use crate::units::mb_s_to_gbps;

/// One network configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    /// Machine name written into persisted rows (e.g. `"ethernet"`).
    pub name: String,
    /// Display label (e.g. `"Traditional SAN (Ethernet)"`).
    pub label: String,
    /// Link capacity in MB/s of payload.
    pub capacity_mb_s: f64,
}

impl Scenario {
    /// Create a scenario, failing fast on a non-positive or non-finite
    /// capacity.
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        capacity_mb_s: f64,
    ) -> SanResult<Self> {
        let scenario = Self { name: name.into(), label: label.into(), capacity_mb_s };
        scenario.validate()?;
        Ok(scenario)
    }

    /// Fail fast on a capacity the queueing formulas cannot run with.
    ///
    /// The fields are public, so a struct-literal scenario can skip
    /// [`Scenario::new`]; the pipeline re-checks at generation start.
    pub fn validate(&self) -> SanResult<()> {
        if !self.capacity_mb_s.is_finite() || self.capacity_mb_s <= 0.0 {
            return Err(SanError::Config(format!(
                "link capacity must be a positive finite MB/s value, got {}",
                self.capacity_mb_s
            )));
        }
        Ok(())
    }

    /// Legacy SAN: 1 Gbps Ethernet → 125 MB/s of payload capacity.
    pub fn traditional_ethernet() -> Scenario {
        Scenario {
            name:          "ethernet".to_owned(),
            label:         "Traditional SAN (Ethernet)".to_owned(),
            capacity_mb_s: 125.0,
        }
    }

    /// Improved SAN: 16 Gbps Fibre Channel → 2000 MB/s of payload capacity.
    pub fn fibre_channel() -> Scenario {
        Scenario {
            name:          "fc".to_owned(),
            label:         "Improved SAN (Fibre Channel)".to_owned(),
            capacity_mb_s: 2000.0,
        }
    }

    /// Link capacity expressed as Gbps.
    #[inline]
    pub fn capacity_gbps(&self) -> f64 {
        mb_s_to_gbps(self.capacity_mb_s)
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.0} MB/s)", self.label, self.capacity_mb_s)
    }
}
