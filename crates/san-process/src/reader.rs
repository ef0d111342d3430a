//! Typed CSV read-back of raw simulation rows.

use std::io::Read;
use std::path::Path;

use san_model::SimulationRecord;

use crate::error::{ProcessError, ProcessResult};

/// Load raw records from a CSV file written by `san-output`.
pub fn read_records(path: &Path) -> ProcessResult<Vec<SimulationRecord>> {
    let file = std::fs::File::open(path).map_err(ProcessError::Io)?;
    read_records_reader(file)
}

/// Like [`read_records`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or reading from streams.
pub fn read_records_reader<R: Read>(reader: R) -> ProcessResult<Vec<SimulationRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for (i, result) in csv_reader.deserialize::<SimulationRecord>().enumerate() {
        let record =
            result.map_err(|e| ProcessError::Parse(format!("row {}: {e}", i + 1)))?;
        records.push(record);
    }
    Ok(records)
}
