//! Offered-load classes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Traffic intensity class of one schedule phase (or, after spike injection,
/// of one sample).
///
/// Each class maps to a uniform MB/s sampling range:
///
/// | Class    | Range (MB/s) | Typical meaning                          |
/// |----------|--------------|------------------------------------------|
/// | `Low`    | [50, 150)    | background I/O                           |
/// | `Medium` | [200, 350)   | business-hours mixed workload            |
/// | `High`   | [400, 600)   | scheduled backup traffic                 |
/// | `Spike`  | [100, 700)   | erratic bursts / injected congestion     |
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadClass {
    Low,
    Medium,
    High,
    Spike,
}

impl LoadClass {
    /// Uniform sampling range in MB/s.
    pub fn range_mb_s(self) -> (f64, f64) {
        match self {
            LoadClass::Low    => (50.0, 150.0),
            LoadClass::Medium => (200.0, 350.0),
            LoadClass::High   => (400.0, 600.0),
            LoadClass::Spike  => (100.0, 700.0),
        }
    }

    /// Midpoint of the class range — the baseline a spike multiplier is
    /// applied to.
    pub fn baseline_mb_s(self) -> f64 {
        let (lo, hi) = self.range_mb_s();
        (lo + hi) / 2.0
    }
}

impl fmt::Display for LoadClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LoadClass::Low    => "Low",
            LoadClass::Medium => "Medium",
            LoadClass::High   => "High",
            LoadClass::Spike  => "Spike",
        };
        f.write_str(s)
    }
}
