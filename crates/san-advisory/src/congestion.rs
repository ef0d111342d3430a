//! Offline congestion forecasting.
//!
//! A deliberately simple heuristic: blend the historical mean utilization
//! 50/50 with the utilization the proposed future load would produce against
//! the best throughput observed so far, then bucket the result.

use std::fmt;

use san_process::ProcessedRecord;

/// Forecast bucket for a proposed future load.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CongestionRisk {
    Low,
    Medium,
    High,
}

impl CongestionRisk {
    /// Operator-facing recommendation for this bucket.
    pub fn advice(self) -> &'static str {
        match self {
            CongestionRisk::Low => "Low congestion expected. Safe for heavy backups.",
            CongestionRisk::Medium => {
                "Medium congestion expected. Consider staggering backup jobs."
            }
            CongestionRisk::High => "High congestion risk! Avoid backup-heavy operations.",
        }
    }
}

impl fmt::Display for CongestionRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Predict congestion risk for `future_load_mb_s` given observed history.
///
/// Blends 50% historical mean utilization with 50% projected utilization
/// (future load over the best observed effective throughput).  Thresholds:
/// `< 0.4` Low, `< 0.7` Medium, otherwise High.  An empty history counts as
/// zero historical utilization.
pub fn predict_congestion(records: &[ProcessedRecord], future_load_mb_s: f64) -> CongestionRisk {
    let historical_util = if records.is_empty() {
        0.0
    } else {
        records.iter().map(|r| r.utilization_rho).sum::<f64>() / records.len() as f64
    };

    let observed_max = records
        .iter()
        .map(|r| r.effective_throughput_mb_s)
        .fold(0.0_f64, f64::max);
    // Substitute 1 MB/s only when nothing positive was observed; a genuine
    // sub-1.0 maximum is a real (tiny) capacity.
    let max_capacity = if observed_max <= 0.0 { 1.0 } else { observed_max };

    let future_util = future_load_mb_s / max_capacity;
    let combined = 0.5 * historical_util + 0.5 * future_util;

    if combined < 0.4 {
        CongestionRisk::Low
    } else if combined < 0.7 {
        CongestionRisk::Medium
    } else {
        CongestionRisk::High
    }
}
