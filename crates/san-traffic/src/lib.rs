//! `san-traffic` — offered-load generation for the san_sim pipeline.
//!
//! A run is described by a [`LoadSchedule`] (ordered phases, each holding a
//! [`LoadClass`]) and a [`SpikePolicy`].  The [`TrafficGenerator`] walks the
//! schedule one step at a time, draws an offered load from the active class's
//! uniform range, and occasionally overrides the draw with a congestion
//! spike.  All randomness flows through one explicitly seeded
//! [`SimRng`](san_core::SimRng) — the same seed and parameters always
//! reproduce the same sample sequence.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use san_traffic::{LoadSchedule, SpikePolicy, TrafficGenerator};
//!
//! let schedule = LoadSchedule::phase2_default();
//! let traffic = TrafficGenerator::new(schedule, SpikePolicy::default(), 42, 60.0, 1.0)?;
//! let samples = traffic.generate();  // 60 TrafficSamples, one per second
//! ```

pub mod class;
pub mod error;
pub mod generator;
pub mod schedule;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use class::LoadClass;
pub use error::{TrafficError, TrafficResult};
pub use generator::{SpikePolicy, TrafficGenerator, TrafficSample};
pub use schedule::{LoadSchedule, Phase};
