//! CSV output backend.
//!
//! Creates `sim_results.csv` in the configured output directory with the raw
//! column schema of [`SimulationRecord`] — the renaming step in
//! `san-process` maps these to display names later.

use std::fs::File;
use std::path::Path;

use csv::{Writer, WriterBuilder};

use san_model::SimulationRecord;

use crate::writer::RecordWriter;
use crate::OutputResult;

/// The fixed file name inside the output directory.
pub const SIM_RESULTS_FILE: &str = "sim_results.csv";

/// Header row, matching `SimulationRecord`'s field order.
const HEADER: [&str; 13] = [
    "scenario",
    "encryption",
    "timestamp",
    "load_class",
    "load_mb_s",
    "utilization",
    "queue_delay_s",
    "throughput_mb_s",
    "effective_mb_s",
    "dropped",
    "enc_delay_s",
    "inflation_factor",
    "latency_s",
];

/// Writes simulation records to one CSV file.
pub struct CsvSink {
    records:  Writer<File>,
    finished: bool,
}

impl CsvSink {
    /// Open (or create) `sim_results.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        // Header is written explicitly so the file carries it even when the
        // run produces zero records.
        let mut records = WriterBuilder::new()
            .has_headers(false)
            .from_path(dir.join(SIM_RESULTS_FILE))?;
        records.write_record(HEADER)?;
        Ok(Self { records, finished: false })
    }
}

impl RecordWriter for CsvSink {
    fn write_records(&mut self, records: &[SimulationRecord]) -> OutputResult<()> {
        for record in records {
            self.records.serialize(record)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.records.flush()?;
        Ok(())
    }
}

/// Convenience: write a full record set to `dir/sim_results.csv` in one call.
pub fn write_records_csv(dir: &Path, records: &[SimulationRecord]) -> OutputResult<()> {
    let mut sink = CsvSink::new(dir)?;
    sink.write_records(records)?;
    sink.finish()
}
