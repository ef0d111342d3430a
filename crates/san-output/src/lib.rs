//! `san-output` — persistence for the san_sim pipeline.
//!
//! One backend: CSV, behind the [`RecordWriter`] trait so tests and future
//! sinks can substitute their own.  A write failure never invalidates the
//! in-memory record set — callers keep the records and surface the
//! [`OutputError`] as a recoverable condition.
//!
//! # Usage
//!
//! ```rust,ignore
//! use san_output::{CsvSink, RecordWriter};
//!
//! let mut sink = CsvSink::new(Path::new("./output"))?;
//! sink.write_records(&records)?;
//! sink.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod writer;

#[cfg(test)]
mod tests;

pub use self::csv::{CsvSink, write_records_csv};
pub use error::{OutputError, OutputResult};
pub use writer::RecordWriter;
