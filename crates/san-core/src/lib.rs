//! `san-core` — foundational types for the `san_sim` SAN simulation pipeline.
//!
//! This crate is a dependency of every other `san-*` crate.  It intentionally
//! has no `san-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`scenario`] | `Scenario` — a network configuration under comparison  |
//! | [`config`]   | `RunConfig` — duration, step size, seed, encryption    |
//! | [`time`]     | `Tick`, `StepClock`                                    |
//! | [`units`]    | Gbps ↔ MB/s conversions                                |
//! | [`rng`]      | `SimRng` — explicitly seeded run-level RNG             |
//! | [`error`]    | `SanError`, `SanResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod rng;
pub mod scenario;
pub mod time;
pub mod units;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::RunConfig;
pub use error::{SanError, SanResult};
pub use rng::SimRng;
pub use scenario::Scenario;
pub use time::{StepClock, Tick};
pub use units::{gbps_to_mb_s, mb_s_to_gbps};
