//! M/M/1 queueing state, derived per sample.
//!
//! The closed-form mean system time for an M/M/1 queue with arrival rate λ
//! and service rate μ is `1 / (μ - λ)`.  With both rates expressed in MB/s
//! this becomes `1 / (capacity - load)` seconds, valid only while
//! `load < capacity`.  At or past capacity the queue is unstable: delay is
//! reported as a large finite sentinel (so every persisted cell stays
//! numeric) and the sample is flagged dropped.

/// Delay sentinel for unstable samples, in seconds.  Finite on purpose.
pub const UNSTABLE_DELAY_S: f64 = 1.0e6;

/// Queueing metrics for one traffic sample against one link.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QueueState {
    /// `load / capacity`, reported raw (may be ≥ 1 for unstable samples).
    pub utilization: f64,
    /// Mean M/M/1 delay in seconds, or [`UNSTABLE_DELAY_S`] when saturated.
    pub queue_delay_s: f64,
    /// Achieved throughput: `min(load, capacity)` — the saturation ceiling.
    pub throughput_mb_s: f64,
    /// True when `load ≥ capacity` (arrival rate exceeds service rate).
    pub dropped: bool,
}

impl QueueState {
    /// Compute the queue state for an offered load against a link capacity.
    ///
    /// Pure and stateless: nothing is carried over from previous samples.
    /// Assumes `capacity_mb_s > 0` (validated at pipeline entry).
    pub fn from_load(offered_mb_s: f64, capacity_mb_s: f64) -> QueueState {
        let utilization = offered_mb_s / capacity_mb_s;

        if offered_mb_s >= capacity_mb_s {
            return QueueState {
                utilization,
                queue_delay_s:   UNSTABLE_DELAY_S,
                throughput_mb_s: capacity_mb_s,
                dropped:         true,
            };
        }

        QueueState {
            utilization,
            queue_delay_s:   1.0 / (capacity_mb_s - offered_mb_s),
            throughput_mb_s: offered_mb_s,
            dropped:         false,
        }
    }
}
