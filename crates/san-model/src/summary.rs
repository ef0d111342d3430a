//! Per-run aggregate statistics for console reporting.

use crate::queue::UNSTABLE_DELAY_S;
use crate::record::SimulationRecord;

/// Aggregates over one run's record set.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub scenario:   String,
    pub encryption: bool,
    pub samples:    usize,
    pub mean_throughput_mb_s: f64,
    /// Highest latency among stable samples; `None` if every sample dropped.
    pub max_stable_latency_s: Option<f64>,
    /// Fraction of samples flagged dropped.
    pub drop_ratio: f64,
}

impl RunSummary {
    /// Summarize one run.  Returns `None` for an empty record set.
    ///
    /// Assumes all records belong to the same (scenario, encryption) run;
    /// the identifying fields are taken from the first record.
    pub fn of(records: &[SimulationRecord]) -> Option<RunSummary> {
        let first = records.first()?;
        let n = records.len() as f64;

        let mean_throughput_mb_s =
            records.iter().map(|r| r.throughput_mb_s).sum::<f64>() / n;

        let max_stable_latency_s = records
            .iter()
            .filter(|r| !r.dropped && r.latency_s < UNSTABLE_DELAY_S)
            .map(|r| r.latency_s)
            .fold(None, |acc: Option<f64>, l| Some(acc.map_or(l, |a| a.max(l))));

        let dropped = records.iter().filter(|r| r.dropped).count();

        Some(RunSummary {
            scenario:   first.scenario.clone(),
            encryption: first.encryption,
            samples:    records.len(),
            mean_throughput_mb_s,
            max_stable_latency_s,
            drop_ratio: dropped as f64 / n,
        })
    }
}
