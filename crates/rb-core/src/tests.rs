//! Unit tests for rb-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EntityId, PatchId};

    #[test]
    fn index_roundtrip() {
        let id = EntityId(42);
        assert_eq!(id.index(), 42);
        assert!(id.is_valid());
        assert!(!EntityId::INVALID.is_valid());
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(EntityId::INVALID.0, u32::MAX);
        assert_eq!(PatchId::default(), PatchId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(EntityId(7).to_string(), "entity#7");
        assert_eq!(PatchId(3).to_string(), "patch#3");
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn next_advances_by_one() {
        assert_eq!(Tick::ZERO.next(), Tick(1));
        assert_eq!(Tick(10).next(), Tick(11));
        assert!(Tick(3) < Tick(3).next());
    }

    #[test]
    fn output_ticks() {
        assert!(Tick(0).is_output_tick(5));
        assert!(Tick(10).is_output_tick(5));
        assert!(!Tick(11).is_output_tick(5));
        assert!(!Tick(0).is_output_tick(0), "interval 0 disables output");
    }

    #[test]
    fn display() {
        assert_eq!(Tick(3).to_string(), "T3");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn unit_draws_are_half_open() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v: f64 = rng.random();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn pick_index_empty_and_bounds() {
        let mut rng = SimRng::new(0);
        assert_eq!(rng.pick_index(0), None);
        for _ in 0..100 {
            assert!(rng.pick_index(3).unwrap() < 3);
        }
        assert_eq!(rng.choose::<u8>(&[]), None);
        assert_eq!(rng.choose(&[9]), Some(&9));
    }

    #[test]
    fn shuffle_is_permutation() {
        let mut rng = SimRng::new(7);
        let mut v: Vec<u32> = (0..50).collect();
        rng.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn replicate_seeds_start_at_base() {
        assert_eq!(SimRng::replicate_seeds(10, 3), vec![10, 11, 12]);
        assert!(SimRng::replicate_seeds(10, 0).is_empty());
    }
}

#[cfg(test)]
mod config {
    use crate::{MAX_DIMENSION, PopulationSize, RbError, RebellionConfig};

    #[test]
    fn defaults_validate() {
        let cfg = RebellionConfig::default();
        cfg.validate().unwrap();
        // floor(0.04 * 1600) = 64, floor(0.7 * 1600) = 1120
        assert_eq!(cfg.cop_count(), 64);
        assert_eq!(cfg.agent_count(), 1120);
    }

    #[test]
    fn density_floors() {
        assert_eq!(PopulationSize::Density(0.5).resolve(3), 4); // floor(4.5)
        assert_eq!(PopulationSize::Count(7).resolve(3), 7);
    }

    #[test]
    fn rejects_zero_dimension_vision_and_jail() {
        let bad = [
            RebellionConfig { dimension: 0, ..Default::default() },
            RebellionConfig { vision: 0, ..Default::default() },
            RebellionConfig { max_jail_term: 0, ..Default::default() },
        ];
        for cfg in bad {
            assert!(matches!(cfg.validate(), Err(RbError::Config(_))), "{cfg:?}");
        }
    }

    #[test]
    fn rejects_dimension_whose_patch_ids_overflow() {
        let cfg = RebellionConfig {
            dimension: MAX_DIMENSION + 1,
            cops:      PopulationSize::Count(1),
            agents:    PopulationSize::Count(1),
            ..Default::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("at most"), "{err}");

        let largest = RebellionConfig { dimension: MAX_DIMENSION, ..cfg };
        largest.validate().unwrap();
        // The last patch id stays below the INVALID marker.
        let last = MAX_DIMENSION as u64 * MAX_DIMENSION as u64 - 1;
        assert!(last < crate::PatchId::INVALID.0 as u64);
    }

    #[test]
    fn rejects_bad_densities() {
        for d in [0.0, -0.1, 1.5, f64::NAN] {
            let cfg = RebellionConfig { cops: PopulationSize::Density(d), ..Default::default() };
            assert!(cfg.validate().is_err(), "density {d} accepted");
        }
    }

    #[test]
    fn rejects_over_capacity() {
        let cfg = RebellionConfig {
            dimension: 5,
            cops:      PopulationSize::Count(5),
            agents:    PopulationSize::Count(21),
            ..Default::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("exceeds"), "{err}");

        let exact = RebellionConfig { agents: PopulationSize::Count(20), ..cfg };
        exact.validate().unwrap();
    }

    #[test]
    fn rejects_out_of_range_legitimacy_and_k() {
        let cfg = RebellionConfig { government_legitimacy: 1.2, ..Default::default() };
        assert!(cfg.validate().is_err());
        let cfg = RebellionConfig { k: -1.0, ..Default::default() };
        assert!(cfg.validate().is_err());
        let cfg = RebellionConfig { threshold: f64::INFINITY, ..Default::default() };
        assert!(cfg.validate().is_err());
    }
}
