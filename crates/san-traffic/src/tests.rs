//! Unit tests for san-traffic.

#[cfg(test)]
mod class_tests {
    use crate::LoadClass;

    #[test]
    fn ranges_are_ordered() {
        for class in [LoadClass::Low, LoadClass::Medium, LoadClass::High, LoadClass::Spike] {
            let (lo, hi) = class.range_mb_s();
            assert!(lo < hi, "{class}: {lo} >= {hi}");
        }
    }

    #[test]
    fn baseline_is_midpoint() {
        assert_eq!(LoadClass::Low.baseline_mb_s(), 100.0);
        assert_eq!(LoadClass::High.baseline_mb_s(), 500.0);
    }

    #[test]
    fn display_names() {
        assert_eq!(LoadClass::Medium.to_string(), "Medium");
        assert_eq!(LoadClass::Spike.to_string(), "Spike");
    }
}

#[cfg(test)]
mod schedule_tests {
    use crate::{LoadClass, LoadSchedule, Phase, TrafficError};

    #[test]
    fn empty_schedule_rejected() {
        assert!(matches!(
            LoadSchedule::new(vec![]),
            Err(TrafficError::EmptySchedule)
        ));
    }

    #[test]
    fn non_positive_phase_rejected() {
        let bad = vec![Phase { duration_secs: 0.0, class: LoadClass::Low }];
        assert!(LoadSchedule::new(bad).is_err());
    }

    #[test]
    fn phase2_profile_boundaries() {
        let s = LoadSchedule::phase2_default();
        assert_eq!(s.class_at(0.0), LoadClass::Low);
        assert_eq!(s.class_at(14.9), LoadClass::Low);
        assert_eq!(s.class_at(15.0), LoadClass::Medium);
        assert_eq!(s.class_at(30.0), LoadClass::High);
        assert_eq!(s.class_at(45.0), LoadClass::Spike);
        assert_eq!(s.total_secs(), 60.0);
    }

    #[test]
    fn past_end_holds_last_class() {
        let s = LoadSchedule::phase2_default();
        assert_eq!(s.class_at(1e6), LoadClass::Spike);
    }

    #[test]
    fn constant_never_changes() {
        let s = LoadSchedule::constant(LoadClass::High);
        assert_eq!(s.class_at(0.0), LoadClass::High);
        assert_eq!(s.class_at(1e9), LoadClass::High);
    }
}

#[cfg(test)]
mod generator_tests {
    use crate::{LoadClass, LoadSchedule, SpikePolicy, TrafficGenerator, TrafficSample};

    fn generate(seed: u64, policy: SpikePolicy) -> Vec<TrafficSample> {
        TrafficGenerator::new(LoadSchedule::phase2_default(), policy, seed, 60.0, 1.0)
            .unwrap()
            .generate()
    }

    #[test]
    fn produces_one_sample_per_step() {
        let samples = generate(42, SpikePolicy::disabled());
        assert_eq!(samples.len(), 60);
        for (i, s) in samples.iter().enumerate() {
            assert_eq!(s.tick.0, i as u64);
            assert_eq!(s.timestamp_s, i as f64);
        }
    }

    #[test]
    fn same_seed_identical_sequence() {
        let a = generate(42, SpikePolicy::default());
        let b = generate(42, SpikePolicy::default());
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let a = generate(1, SpikePolicy::disabled());
        let b = generate(2, SpikePolicy::disabled());
        assert_ne!(a, b);
    }

    #[test]
    fn loads_stay_in_class_range_without_spikes() {
        let samples = generate(7, SpikePolicy::disabled());
        for s in &samples {
            let (lo, hi) = s.class.range_mb_s();
            assert!(s.offered_mb_s >= lo && s.offered_mb_s < hi, "{s:?}");
        }
        // With injection disabled, sample classes follow the schedule exactly.
        assert_eq!(samples[0].class, LoadClass::Low);
        assert_eq!(samples[20].class, LoadClass::Medium);
        assert_eq!(samples[40].class, LoadClass::High);
        assert_eq!(samples[59].class, LoadClass::Spike);
    }

    #[test]
    fn spike_override_retags_and_exceeds_baseline() {
        // probability 1.0: every sample is an injected spike.
        let policy = SpikePolicy { probability: 1.0, min_multiplier: 3.0, max_multiplier: 3.0 };
        let samples = TrafficGenerator::new(
            LoadSchedule::constant(LoadClass::Low),
            policy,
            9,
            10.0,
            1.0,
        )
        .unwrap()
        .generate();

        for s in &samples {
            assert_eq!(s.class, LoadClass::Spike);
            // 3× the Low baseline of 100 MB/s.
            assert_eq!(s.offered_mb_s, 300.0);
        }
    }

    #[test]
    fn fractional_step_counts() {
        let g = TrafficGenerator::new(
            LoadSchedule::phase2_default(),
            SpikePolicy::disabled(),
            1,
            60.0,
            0.1,
        )
        .unwrap();
        assert_eq!(g.len(), 600);
    }

    #[test]
    fn invalid_inputs_rejected() {
        let sched = LoadSchedule::phase2_default;
        assert!(TrafficGenerator::new(sched(), SpikePolicy::disabled(), 1, -1.0, 1.0).is_err());
        assert!(TrafficGenerator::new(sched(), SpikePolicy::disabled(), 1, 60.0, 0.0).is_err());

        let bad_p = SpikePolicy { probability: 1.5, ..SpikePolicy::default() };
        assert!(TrafficGenerator::new(sched(), bad_p, 1, 60.0, 1.0).is_err());

        let bad_m = SpikePolicy { min_multiplier: 0.5, ..SpikePolicy::default() };
        assert!(TrafficGenerator::new(sched(), bad_m, 1, 60.0, 1.0).is_err());
    }
}
