//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing `Tick` counter.  The
//! mapping to simulated seconds is held in `StepClock`:
//!
//!   timestamp_s = tick * step_secs
//!
//! Using an integer tick as the canonical time unit keeps step arithmetic
//! exact; the floating-point timestamp is derived only at the boundary where
//! a sample or record is emitted.
//!
//! The default step is 1 simulated second.  Runs that need finer resolution
//! (e.g. 0.1 s) set `step_secs` smaller; the rest of the pipeline is agnostic.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation step counter.
///
/// Stored as `u64`: at 1 tick/second a u64 lasts ~585 billion years, far
/// longer than any conceivable run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── StepClock ─────────────────────────────────────────────────────────────────

/// Converts between tick counts and simulated seconds.
///
/// `StepClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepClock {
    /// How many simulated seconds one tick represents.  Default: 1.0.
    pub step_secs: f64,
    /// The current tick — advanced by `StepClock::advance()` each step.
    pub current_tick: Tick,
}

impl StepClock {
    /// Create a clock at tick 0 with the given resolution.
    pub fn new(step_secs: f64) -> Self {
        Self { step_secs, current_tick: Tick::ZERO }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Simulated seconds elapsed since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.timestamp_of(self.current_tick)
    }

    /// Timestamp (seconds) of an arbitrary tick under this clock.
    #[inline]
    pub fn timestamp_of(&self, tick: Tick) -> f64 {
        tick.0 as f64 * self.step_secs
    }

    /// How many ticks span `secs` seconds? (rounds up — the run never ends
    /// short of the requested duration)
    #[inline]
    pub fn ticks_for_secs(&self, secs: f64) -> u64 {
        (secs / self.step_secs).ceil() as u64
    }
}

impl fmt::Display for StepClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.1}s)", self.current_tick, self.elapsed_secs())
    }
}
