//! `san-advisory` — the advisory-service boundary of the san_sim pipeline.
//!
//! Two consumers of a processed record set:
//!
//! - [`AdvisoryClient`] sends a summarized window of records to an external
//!   LLM and returns its narrative insight as a string.  Every failure mode
//!   (no key, timeout, HTTP error, malformed body) surfaces as a recoverable
//!   [`AdvisoryError`]; the caller's record set is untouched and the usual
//!   response to an error is to omit the insight panel.
//! - [`predict_congestion`] is a pure, offline heuristic that needs no
//!   network at all.

pub mod client;
pub mod congestion;
pub mod error;


pub use client::{AdvisoryClient, DEFAULT_MODEL};
pub use congestion::{CongestionRisk, predict_congestion};
pub use error::{AdvisoryError, AdvisoryResult};
