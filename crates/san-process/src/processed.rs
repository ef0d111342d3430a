//! The canonical display schema and its derivations.

use std::collections::HashMap;
use std::path::Path;

use csv::WriterBuilder;
use serde::{Deserialize, Serialize};

use san_model::SimulationRecord;
use san_traffic::LoadClass;

use crate::error::ProcessResult;

/// Utilization above which a sample is flagged congested.
pub const CONGESTION_UTILIZATION: f64 = 0.7;

/// Reference transfer volume for the backup-window estimate.
pub const BACKUP_VOLUME_MB: f64 = 1000.0;

/// Quantile of total delay above which a sample is flagged high-latency.
pub const HIGH_LATENCY_QUANTILE: f64 = 0.90;

/// The fixed file name for processed output.
pub const PROCESSED_FILE: &str = "processed_data.csv";

// Guards the backup-window division when effective throughput is zero.
const THROUGHPUT_EPSILON: f64 = 1e-9;

/// One row of the canonical display schema.  Field order is the CSV column
/// order the presentation layer expects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProcessedRecord {
    /// Seconds from run start (raw `timestamp`).
    pub time: f64,
    /// Display label (e.g. `"Traditional SAN (Ethernet)"`).
    pub scenario: String,
    /// `"AES-256"` or `"No Encryption"`.
    pub encryption: String,
    pub load_class: LoadClass,
    pub load_mb_s: f64,
    pub utilization_rho: f64,
    pub queue_delay_s: f64,
    pub throughput_mb_s: f64,
    pub effective_throughput_mb_s: f64,
    pub dropped: bool,
    /// Raw `latency_s` under its canonical name.
    pub total_delay_s: f64,
    /// Utilization above the 0.7 congestion threshold.
    pub is_congested: bool,
    /// Percentage throughput lost versus the best effective throughput seen
    /// for the same scenario in this record set.
    pub encryption_penalty_pct: f64,
    /// Seconds to move [`BACKUP_VOLUME_MB`] at the effective throughput.
    pub backup_window_s: f64,
    /// Total delay above the set's 90th percentile.
    pub high_latency: bool,
}

/// Normalize a raw record set into the display schema.
///
/// Two derivations need whole-set context and run as a second pass over the
/// row-wise output: the encryption penalty is measured against the best
/// effective throughput observed per scenario, and the high-latency flag
/// against the [`HIGH_LATENCY_QUANTILE`] of total delay across the set.
pub fn process(records: &[SimulationRecord]) -> Vec<ProcessedRecord> {
    let mut out: Vec<ProcessedRecord> = records.iter().map(process_one).collect();
    if out.is_empty() {
        return out;
    }

    let mut best_by_scenario: HashMap<String, f64> = HashMap::new();
    for r in &out {
        let best = best_by_scenario.entry(r.scenario.clone()).or_insert(0.0);
        *best = best.max(r.effective_throughput_mb_s);
    }

    let threshold = quantile(
        out.iter().map(|r| r.total_delay_s).collect(),
        HIGH_LATENCY_QUANTILE,
    );

    for r in &mut out {
        let best = best_by_scenario[&r.scenario];
        r.encryption_penalty_pct = if best > 0.0 {
            100.0 * (1.0 - r.effective_throughput_mb_s / best)
        } else {
            0.0
        };
        r.high_latency = r.total_delay_s > threshold;
    }

    out
}

/// Linearly interpolated quantile of a non-empty sample.
fn quantile(mut values: Vec<f64>, q: f64) -> f64 {
    values.sort_by(f64::total_cmp);
    let pos = q * (values.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    values[lo] + (values[hi] - values[lo]) * (pos - lo as f64)
}

fn process_one(r: &SimulationRecord) -> ProcessedRecord {
    ProcessedRecord {
        time:       r.timestamp,
        scenario:   display_scenario(&r.scenario),
        encryption: display_encryption(r.encryption),
        load_class: r.load_class,
        load_mb_s:  r.load_mb_s,
        utilization_rho: r.utilization,
        queue_delay_s:   r.queue_delay_s,
        throughput_mb_s: r.throughput_mb_s,
        effective_throughput_mb_s: r.effective_mb_s,
        dropped:         r.dropped,
        total_delay_s:   r.latency_s,
        is_congested:    r.utilization > CONGESTION_UTILIZATION,
        // Filled in by the dataset-level pass in `process`.
        encryption_penalty_pct: 0.0,
        backup_window_s: BACKUP_VOLUME_MB / (r.effective_mb_s + THROUGHPUT_EPSILON),
        high_latency:    false,
    }
}

/// Map scenario machine names to display labels.  Unknown names pass through
/// unchanged so custom scenarios still render.
fn display_scenario(name: &str) -> String {
    match name {
        "ethernet" => "Traditional SAN (Ethernet)".to_owned(),
        "fc"       => "Improved SAN (Fibre Channel)".to_owned(),
        other      => other.to_owned(),
    }
}

fn display_encryption(enabled: bool) -> String {
    if enabled { "AES-256".to_owned() } else { "No Encryption".to_owned() }
}

/// Write a processed record set to `dir/processed_data.csv`.
pub fn write_processed_csv(dir: &Path, records: &[ProcessedRecord]) -> ProcessResult<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(dir.join(PROCESSED_FILE))?;
    writer.write_record([
        "time",
        "scenario",
        "encryption",
        "load_class",
        "load_mb_s",
        "utilization_rho",
        "queue_delay_s",
        "throughput_mb_s",
        "effective_throughput_mb_s",
        "dropped",
        "total_delay_s",
        "is_congested",
        "encryption_penalty_pct",
        "backup_window_s",
        "high_latency",
    ])?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
