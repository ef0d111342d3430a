//! Load-class schedules.
//!
//! A schedule is an ordered list of phases, each pinning one [`LoadClass`]
//! for a span of simulated seconds.  Lookups past the end of the last phase
//! resolve to the last phase's class, so a run longer than its schedule
//! simply holds the final intensity.

use crate::class::LoadClass;
use crate::error::{TrafficError, TrafficResult};

/// One contiguous span of a schedule.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Phase {
    pub duration_secs: f64,
    pub class:         LoadClass,
}

/// An ordered, non-empty sequence of phases.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadSchedule {
    phases: Vec<Phase>,
}

impl LoadSchedule {
    /// Build a schedule from phases, rejecting empty lists and non-positive
    /// phase durations.
    pub fn new(phases: Vec<Phase>) -> TrafficResult<Self> {
        if phases.is_empty() {
            return Err(TrafficError::EmptySchedule);
        }
        for (i, p) in phases.iter().enumerate() {
            if !p.duration_secs.is_finite() || p.duration_secs <= 0.0 {
                return Err(TrafficError::Config(format!(
                    "phase {i} duration must be positive and finite, got {}",
                    p.duration_secs
                )));
            }
        }
        Ok(Self { phases })
    }

    /// The canonical 60-second comparison profile:
    /// 0–15 s Low, 15–30 s Medium, 30–45 s High, 45–60 s Spike.
    pub fn phase2_default() -> Self {
        Self {
            phases: vec![
                Phase { duration_secs: 15.0, class: LoadClass::Low },
                Phase { duration_secs: 15.0, class: LoadClass::Medium },
                Phase { duration_secs: 15.0, class: LoadClass::High },
                Phase { duration_secs: 15.0, class: LoadClass::Spike },
            ],
        }
    }

    /// A single-phase schedule holding one class indefinitely.
    pub fn constant(class: LoadClass) -> Self {
        Self { phases: vec![Phase { duration_secs: f64::MAX, class }] }
    }

    /// The active class at `t_secs` from run start.
    ///
    /// Times past the last phase (and any time in an over-long run) map to
    /// the last phase's class.
    pub fn class_at(&self, t_secs: f64) -> LoadClass {
        let mut elapsed = 0.0;
        for phase in &self.phases {
            elapsed += phase.duration_secs;
            if t_secs < elapsed {
                return phase.class;
            }
        }
        self.phases[self.phases.len() - 1].class
    }

    /// Total scheduled duration in seconds.
    pub fn total_secs(&self) -> f64 {
        self.phases.iter().map(|p| p.duration_secs).sum()
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }
}
