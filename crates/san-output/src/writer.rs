//! The `RecordWriter` trait implemented by output sinks.

use san_model::SimulationRecord;

use crate::OutputResult;

/// Trait implemented by record sinks.
pub trait RecordWriter {
    /// Write a batch of records in order.
    fn write_records(&mut self, records: &[SimulationRecord]) -> OutputResult<()>;

    /// Flush and close the underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
