//! `san-process` — the normalization step between the simulator's raw CSV and
//! the presentation layer.
//!
//! Three jobs:
//!
//! 1. **Read back** raw `sim_results.csv` rows as typed
//!    [`SimulationRecord`](san_model::SimulationRecord)s.
//! 2. **Rename** raw fields to the canonical display schema
//!    (`timestamp` → `time`, `latency_s` → `total_delay_s`) and map machine
//!    values to readable labels (`true` → `"AES-256"`, `"ethernet"` →
//!    `"Traditional SAN (Ethernet)"`).
//! 3. **Derive** the metrics the dashboard consumes: congestion flags, the
//!    backup-window estimate for a 1000 MB transfer, the per-scenario
//!    encryption throughput penalty, and the 90th-percentile high-latency
//!    flag.

pub mod error;
pub mod processed;
pub mod reader;


pub use error::{ProcessError, ProcessResult};
pub use processed::{
    BACKUP_VOLUME_MB, CONGESTION_UTILIZATION, HIGH_LATENCY_QUANTILE, PROCESSED_FILE,
    ProcessedRecord, process, write_processed_csv,
};
pub use reader::{read_records, read_records_reader};
