//! The traffic generator.
//!
//! One sample per discrete step: the active [`LoadClass`] is looked up in the
//! schedule, an offered load is drawn uniformly from the class range, and
//! with `SpikePolicy::probability` the draw is overridden by a congestion
//! spike of `multiplier × class baseline` (multiplier uniform in
//! `[min_multiplier, max_multiplier)`).  Overridden samples are re-tagged
//! [`LoadClass::Spike`] so downstream consumers can see which rows were
//! injected.
//!
//! Draw order per step is fixed (load, spike coin, spike multiplier), which
//! is what makes equal seeds produce byte-identical sequences.

use san_core::{SimRng, StepClock, Tick};

use crate::class::LoadClass;
use crate::error::{TrafficError, TrafficResult};
use crate::schedule::LoadSchedule;

// ── SpikePolicy ───────────────────────────────────────────────────────────────

/// Congestion spike injection policy.
///
/// The multiplier floor of 3× comes from the qualitative requirement that a
/// spike be an unmistakable outlier over the class baseline; the exact
/// probability is a tunable, not a derived constant.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpikePolicy {
    /// Per-step probability of overriding the sampled load.
    pub probability: f64,
    /// Lower bound of the baseline multiplier (inclusive).
    pub min_multiplier: f64,
    /// Upper bound of the baseline multiplier (exclusive).
    pub max_multiplier: f64,
}

impl Default for SpikePolicy {
    fn default() -> Self {
        Self { probability: 0.05, min_multiplier: 3.0, max_multiplier: 5.0 }
    }
}

impl SpikePolicy {
    /// A policy that never injects spikes.
    pub fn disabled() -> Self {
        Self { probability: 0.0, min_multiplier: 3.0, max_multiplier: 5.0 }
    }

    fn validate(&self) -> TrafficResult<()> {
        if !(0.0..=1.0).contains(&self.probability) || !self.probability.is_finite() {
            return Err(TrafficError::Config(format!(
                "spike probability must be in [0, 1], got {}",
                self.probability
            )));
        }
        if self.min_multiplier < 1.0 || self.max_multiplier < self.min_multiplier {
            return Err(TrafficError::Config(format!(
                "spike multipliers must satisfy 1 <= min <= max, got [{}, {}]",
                self.min_multiplier, self.max_multiplier
            )));
        }
        Ok(())
    }
}

// ── TrafficSample ─────────────────────────────────────────────────────────────

/// One point of offered load in simulated time.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrafficSample {
    pub tick:         Tick,
    /// Seconds from run start (monotonic, `tick * step_secs`).
    pub timestamp_s:  f64,
    /// Offered load in MB/s, always ≥ 0.
    pub offered_mb_s: f64,
    /// The class that produced this sample (`Spike` if overridden).
    pub class:        LoadClass,
}

// ── TrafficGenerator ──────────────────────────────────────────────────────────

/// Walks a [`LoadSchedule`] and yields one [`TrafficSample`] per step.
///
/// Implements `Iterator`, so callers can stream samples or materialize them
/// all at once with [`generate`][Self::generate].
pub struct TrafficGenerator {
    schedule:    LoadSchedule,
    policy:      SpikePolicy,
    rng:         SimRng,
    clock:       StepClock,
    total_steps: u64,
}

impl TrafficGenerator {
    /// Create a generator for `duration_secs` of traffic at `step_secs`
    /// resolution, seeded explicitly.
    pub fn new(
        schedule:      LoadSchedule,
        policy:        SpikePolicy,
        seed:          u64,
        duration_secs: f64,
        step_secs:     f64,
    ) -> TrafficResult<Self> {
        policy.validate()?;
        if !duration_secs.is_finite() || duration_secs <= 0.0 {
            return Err(TrafficError::Config(format!(
                "duration must be positive and finite, got {duration_secs}"
            )));
        }
        if !step_secs.is_finite() || step_secs <= 0.0 {
            return Err(TrafficError::Config(format!(
                "step size must be positive and finite, got {step_secs}"
            )));
        }
        let clock = StepClock::new(step_secs);
        let total_steps = clock.ticks_for_secs(duration_secs);
        Ok(Self { schedule, policy, rng: SimRng::new(seed), clock, total_steps })
    }

    /// Materialize the full sample sequence.
    pub fn generate(self) -> Vec<TrafficSample> {
        self.collect()
    }

    fn sample_at(&mut self, tick: Tick) -> TrafficSample {
        let timestamp_s = self.clock.timestamp_of(tick);
        let class = self.schedule.class_at(timestamp_s);
        let (lo, hi) = class.range_mb_s();

        let mut offered_mb_s = self.rng.gen_range(lo..hi);
        let mut tag = class;

        if self.policy.probability > 0.0 && self.rng.gen_bool(self.policy.probability) {
            let mult = if self.policy.max_multiplier > self.policy.min_multiplier {
                self.rng.gen_range(self.policy.min_multiplier..self.policy.max_multiplier)
            } else {
                self.policy.min_multiplier
            };
            offered_mb_s = class.baseline_mb_s() * mult;
            tag = LoadClass::Spike;
        }

        TrafficSample {
            tick,
            timestamp_s,
            offered_mb_s: offered_mb_s.max(0.0),
            class: tag,
        }
    }
}

impl Iterator for TrafficGenerator {
    type Item = TrafficSample;

    fn next(&mut self) -> Option<TrafficSample> {
        let tick = self.clock.current_tick;
        if tick.0 >= self.total_steps {
            return None;
        }
        let sample = self.sample_at(tick);
        self.clock.advance();
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.total_steps - self.clock.current_tick.0) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TrafficGenerator {}
