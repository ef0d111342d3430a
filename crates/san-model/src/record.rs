//! The persisted flat row.
//!
//! One `SimulationRecord` per (scenario, timestamp) pair — the union of the
//! traffic sample, queue state, and encryption impact.  Field names here are
//! the *raw* on-disk schema; `san-process` renames to the canonical display
//! schema (`timestamp` → `time`, `latency_s` → `total_delay_s`) before the
//! presentation layer reads anything.

use serde::{Deserialize, Serialize};

use san_traffic::{LoadClass, TrafficSample};

use crate::encryption::EncryptionImpact;
use crate::queue::QueueState;

/// One row of simulation output.  Field order is the CSV column order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationRecord {
    /// Scenario machine name (e.g. `"ethernet"`, `"fc"`).
    pub scenario: String,
    pub encryption: bool,
    /// Seconds from run start.
    pub timestamp: f64,
    pub load_class: LoadClass,
    /// Offered load in MB/s.
    pub load_mb_s: f64,
    pub utilization: f64,
    pub queue_delay_s: f64,
    /// Achieved throughput after the capacity ceiling.
    pub throughput_mb_s: f64,
    /// Useful payload rate after encryption size inflation.
    pub effective_mb_s: f64,
    pub dropped: bool,
    pub enc_delay_s: f64,
    pub inflation_factor: f64,
    /// Total per-sample delay: `queue_delay_s + enc_delay_s` (additive).
    pub latency_s: f64,
}

impl SimulationRecord {
    /// Assemble one row from the three per-sample results.
    pub fn assemble(
        scenario_name: &str,
        encryption:    bool,
        sample:        &TrafficSample,
        queue:         QueueState,
        impact:        EncryptionImpact,
    ) -> SimulationRecord {
        SimulationRecord {
            scenario:         scenario_name.to_owned(),
            encryption,
            timestamp:        sample.timestamp_s,
            load_class:       sample.class,
            load_mb_s:        sample.offered_mb_s,
            utilization:      queue.utilization,
            queue_delay_s:    queue.queue_delay_s,
            throughput_mb_s:  queue.throughput_mb_s,
            effective_mb_s:   queue.throughput_mb_s / impact.inflation_factor,
            dropped:          queue.dropped,
            enc_delay_s:      impact.cpu_delay_s,
            inflation_factor: impact.inflation_factor,
            latency_s:        queue.queue_delay_s + impact.cpu_delay_s,
        }
    }
}
