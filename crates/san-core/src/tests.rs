//! Unit tests for san-core primitives.

#[cfg(test)]
mod units {
    use crate::{gbps_to_mb_s, mb_s_to_gbps};

    #[test]
    fn ethernet_is_125_mb_s() {
        assert_eq!(gbps_to_mb_s(1.0), 125.0);
    }

    #[test]
    fn fibre_channel_is_2000_mb_s() {
        assert_eq!(gbps_to_mb_s(16.0), 2000.0);
    }

    #[test]
    fn round_trip() {
        let mb_s = gbps_to_mb_s(4.0);
        assert!((mb_s_to_gbps(mb_s) - 4.0).abs() < 1e-12);
    }
}

#[cfg(test)]
mod time {
    use crate::{StepClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = StepClock::new(1.0);
        assert_eq!(clock.elapsed_secs(), 0.0);
        clock.advance();
        clock.advance();
        assert_eq!(clock.elapsed_secs(), 2.0);
    }

    #[test]
    fn fractional_steps() {
        let clock = StepClock::new(0.1);
        assert!((clock.timestamp_of(Tick(25)) - 2.5).abs() < 1e-12);
        assert_eq!(clock.ticks_for_secs(60.0), 600);
    }

    #[test]
    fn ticks_round_up() {
        let clock = StepClock::new(1.0);
        assert_eq!(clock.ticks_for_secs(59.5), 60);
    }

    #[test]
    fn display() {
        assert_eq!(Tick(7).to_string(), "T7");
    }
}

#[cfg(test)]
mod scenario {
    use crate::Scenario;

    #[test]
    fn presets_match_link_rates() {
        let eth = Scenario::traditional_ethernet();
        assert_eq!(eth.capacity_mb_s, 125.0);
        assert!((eth.capacity_gbps() - 1.0).abs() < 1e-12);

        let fc = Scenario::fibre_channel();
        assert_eq!(fc.capacity_mb_s, 2000.0);
        assert!((fc.capacity_gbps() - 16.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_non_positive_capacity() {
        assert!(Scenario::new("x", "X", 0.0).is_err());
        assert!(Scenario::new("x", "X", -5.0).is_err());
        assert!(Scenario::new("x", "X", f64::NAN).is_err());
    }

    #[test]
    fn validate_catches_struct_literal_scenarios() {
        let bad = Scenario {
            name:          "x".to_owned(),
            label:         "X".to_owned(),
            capacity_mb_s: -1.0,
        };
        assert!(bad.validate().is_err());
        assert!(Scenario::fibre_channel().validate().is_ok());
    }
}

#[cfg(test)]
mod config {
    use crate::RunConfig;

    #[test]
    fn valid_config_passes() {
        let cfg = RunConfig::new(60.0, 42, false);
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.total_steps(), 60);
    }

    #[test]
    fn rejects_bad_duration() {
        assert!(RunConfig::new(0.0, 1, false).validate().is_err());
        assert!(RunConfig::new(-10.0, 1, false).validate().is_err());
        assert!(RunConfig::new(f64::INFINITY, 1, false).validate().is_err());
    }

    #[test]
    fn rejects_bad_step() {
        let mut cfg = RunConfig::new(60.0, 1, false);
        cfg.step_secs = 0.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn partial_final_step_counted() {
        let mut cfg = RunConfig::new(60.0, 1, false);
        cfg.step_secs = 0.7;
        assert_eq!(cfg.total_steps(), 86); // 60 / 0.7 = 85.71 → 86
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        for _ in 0..100 {
            assert_eq!(a.gen_range(0.0..1.0f64), b.gen_range(0.0..1.0f64));
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SimRng::new(1);
        let mut b = SimRng::new(2);
        let xs: Vec<f64> = (0..16).map(|_| a.gen_range(0.0..1.0)).collect();
        let ys: Vec<f64> = (0..16).map(|_| b.gen_range(0.0..1.0)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn gen_bool_clamps() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(-0.5));
        assert!(rng.gen_bool(2.0));
    }
}
