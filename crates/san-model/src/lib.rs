//! `san-model` — the analytic core of the san_sim pipeline.
//!
//! Two pure per-sample models and the batch pipeline that applies them:
//!
//! | Module         | Contents                                              |
//! |----------------|-------------------------------------------------------|
//! | [`queue`]      | `QueueState` — M/M/1 utilization, delay, throughput   |
//! | [`encryption`] | `EncryptionImpact` — CPU cost + payload inflation     |
//! | [`record`]     | `SimulationRecord` — the persisted flat row           |
//! | [`pipeline`]   | `simulate` — generate → model → record, in one pass   |
//! | [`summary`]    | `RunSummary` — per-run aggregate statistics           |
//!
//! Neither model holds state across samples: utilization, delay, and
//! throughput are recomputed from the offered load and the link capacity at
//! every step.  Saturated steps (`load ≥ capacity`) are emitted with the
//! `dropped` flag set rather than skipped — rendering the hockey stick is
//! the point of the exercise.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the sample→record map on Rayon's thread pool.     |

pub mod encryption;
pub mod error;
pub mod pipeline;
pub mod queue;
pub mod record;
pub mod summary;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use encryption::{CPU_COST_S_PER_MB, EncryptionImpact, SIZE_INFLATION_FACTOR};
pub use error::{ModelError, ModelResult};
pub use pipeline::simulate;
pub use queue::{QueueState, UNSTABLE_DELAY_S};
pub use record::SimulationRecord;
pub use summary::RunSummary;
