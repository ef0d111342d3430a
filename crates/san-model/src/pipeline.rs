//! The batch pipeline: generate traffic, apply both models, emit records.
//!
//! Single-threaded, synchronous, one pass.  Every sample's computation is
//! independent, so the `parallel` feature swaps the map for a Rayon
//! `par_iter` with identical output order.

use san_core::{RunConfig, Scenario};
use san_traffic::{LoadSchedule, SpikePolicy, TrafficGenerator, TrafficSample};

use crate::encryption::EncryptionImpact;
use crate::error::ModelResult;
use crate::queue::QueueState;
use crate::record::SimulationRecord;

/// Run one scenario end-to-end and return the ordered record set.
///
/// Fails fast on invalid configuration; saturated samples are emitted with
/// `dropped = true`, never filtered out.
pub fn simulate(
    scenario: &Scenario,
    config:   &RunConfig,
    schedule: &LoadSchedule,
    policy:   SpikePolicy,
) -> ModelResult<Vec<SimulationRecord>> {
    config.validate()?;
    scenario.validate()?;

    let samples: Vec<TrafficSample> = TrafficGenerator::new(
        schedule.clone(),
        policy,
        config.seed,
        config.duration_secs,
        config.step_secs,
    )?
    .generate();

    Ok(map_samples(scenario, config.encryption_enabled, &samples))
}

/// Map traffic samples through the queueing and encryption models.
fn map_samples(
    scenario:   &Scenario,
    encryption: bool,
    samples:    &[TrafficSample],
) -> Vec<SimulationRecord> {
    #[cfg(not(feature = "parallel"))]
    {
        samples
            .iter()
            .map(|s| record_for(scenario, encryption, s))
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        samples
            .par_iter()
            .map(|s| record_for(scenario, encryption, s))
            .collect()
    }
}

fn record_for(scenario: &Scenario, encryption: bool, sample: &TrafficSample) -> SimulationRecord {
    let queue = QueueState::from_load(sample.offered_mb_s, scenario.capacity_mb_s);
    let impact = EncryptionImpact::for_load(sample.offered_mb_s, encryption);
    SimulationRecord::assemble(&scenario.name, encryption, sample, queue, impact)
}
