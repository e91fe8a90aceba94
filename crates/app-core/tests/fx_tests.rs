// Host-side tests for tier selection, the particle budget, and particle
// sampling bands.

use app_core::{
    burst_count, choose_tier, clamp_burst, sample_particle, DeviceSignals, ParticleBudget,
    PerfTier, BURST_MAX, BURST_MIN,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn signals() -> DeviceSignals {
    DeviceSignals::default()
}

#[test]
fn presets_scale_down_with_the_tier() {
    let high = PerfTier::High.preset();
    let medium = PerfTier::Medium.preset();
    let low = PerfTier::Low.preset();
    assert!(high.throttle_ms < medium.throttle_ms && medium.throttle_ms < low.throttle_ms);
    assert!(high.max_alive > medium.max_alive && medium.max_alive > low.max_alive);
    assert!(high.burst.1 > medium.burst.1 && medium.burst.1 > low.burst.1);
    assert!(high.duration_ms.1 > medium.duration_ms.1 && medium.duration_ms.1 > low.duration_ms.1);
}

#[test]
fn persisted_tier_beats_every_heuristic() {
    let constrained = DeviceSignals {
        save_data: true,
        effective_type: Some("slow-2g".to_string()),
        device_memory_gb: Some(2.0),
        cpu_cores: Some(2),
    };
    assert_eq!(
        choose_tier(Some(PerfTier::High), true, &constrained),
        PerfTier::High
    );
    assert_eq!(
        choose_tier(Some(PerfTier::Low), false, &signals()),
        PerfTier::Low
    );
}

#[test]
fn reduced_motion_forces_low() {
    assert_eq!(choose_tier(None, true, &signals()), PerfTier::Low);
    let fast = DeviceSignals {
        device_memory_gb: Some(16.0),
        cpu_cores: Some(16),
        ..signals()
    };
    assert_eq!(choose_tier(None, true, &fast), PerfTier::Low);
}

#[test]
fn unconstrained_device_stays_high() {
    assert_eq!(choose_tier(None, false, &signals()), PerfTier::High);
    let roomy = DeviceSignals {
        effective_type: Some("4g".to_string()),
        device_memory_gb: Some(8.0),
        cpu_cores: Some(8),
        ..signals()
    };
    assert_eq!(choose_tier(None, false, &roomy), PerfTier::High);
}

#[test]
fn constrained_network_steps_down_to_medium() {
    let save = DeviceSignals {
        save_data: true,
        ..signals()
    };
    assert_eq!(choose_tier(None, false, &save), PerfTier::Medium);
    let slow = DeviceSignals {
        effective_type: Some("slow-2g".to_string()),
        ..signals()
    };
    assert_eq!(choose_tier(None, false, &slow), PerfTier::Medium);
}

#[test]
fn tier_low_requires_both_heuristics() {
    // The hardware probe alone only reaches medium, even on a 2 GB / 2 core
    // device; low needs the network probe to have fired first.
    let weak_hw = DeviceSignals {
        device_memory_gb: Some(2.0),
        cpu_cores: Some(2),
        ..signals()
    };
    assert_eq!(choose_tier(None, false, &weak_hw), PerfTier::Medium);

    let weak_both = DeviceSignals {
        save_data: true,
        device_memory_gb: Some(4.0),
        ..signals()
    };
    assert_eq!(choose_tier(None, false, &weak_both), PerfTier::Low);
}

#[test]
fn hardware_thresholds_are_inclusive_at_four() {
    let four_cores = DeviceSignals {
        cpu_cores: Some(4),
        ..signals()
    };
    assert_eq!(choose_tier(None, false, &four_cores), PerfTier::Medium);
    let five_cores = DeviceSignals {
        cpu_cores: Some(5),
        ..signals()
    };
    assert_eq!(choose_tier(None, false, &five_cores), PerfTier::High);
    let four_gb = DeviceSignals {
        device_memory_gb: Some(4.0),
        ..signals()
    };
    assert_eq!(choose_tier(None, false, &four_gb), PerfTier::Medium);
}

#[test]
fn manual_toggle_cycles_through_all_tiers() {
    assert_eq!(PerfTier::High.next(), PerfTier::Medium);
    assert_eq!(PerfTier::Medium.next(), PerfTier::Low);
    assert_eq!(PerfTier::Low.next(), PerfTier::High);
}

#[test]
fn tier_names_round_trip() {
    for tier in [PerfTier::High, PerfTier::Medium, PerfTier::Low] {
        assert_eq!(PerfTier::from_str(tier.as_str()), Some(tier));
    }
    assert_eq!(PerfTier::from_str("ultra"), None);
    assert_eq!(PerfTier::from_str(""), None);
}

#[test]
fn budget_never_exceeds_ceiling() {
    let mut budget = ParticleBudget::new(3);
    assert!(budget.try_spawn());
    assert!(budget.try_spawn());
    assert!(budget.try_spawn());
    assert!(!budget.try_spawn());
    assert_eq!(budget.alive(), 3);
}

#[test]
fn budget_never_goes_negative() {
    let mut budget = ParticleBudget::new(2);
    assert!(budget.try_spawn());
    budget.on_removed();
    budget.on_removed();
    budget.on_removed();
    assert_eq!(budget.alive(), 0);
    assert!(budget.try_spawn());
    assert_eq!(budget.alive(), 1);
}

#[test]
fn lowering_the_ceiling_keeps_in_flight_particles() {
    let mut budget = ParticleBudget::new(4);
    for _ in 0..4 {
        assert!(budget.try_spawn());
    }
    budget.set_ceiling(2);
    assert_eq!(budget.alive(), 4);
    assert!(!budget.try_spawn());
    budget.on_removed();
    budget.on_removed();
    assert!(!budget.try_spawn());
    budget.on_removed();
    assert!(budget.try_spawn());
    assert_eq!(budget.alive(), 2);
}

#[test]
fn budget_survives_interleaved_spawn_and_removal() {
    let mut budget = ParticleBudget::new(5);
    for round in 0..50u32 {
        for _ in 0..(round % 7) {
            budget.try_spawn();
        }
        for _ in 0..(round % 3) {
            budget.on_removed();
        }
        assert!(budget.alive() <= budget.ceiling(), "round {round}");
    }
}

#[test]
fn particle_samples_stay_inside_the_bands() {
    let mut rng = StdRng::seed_from_u64(42);
    for tier in [PerfTier::High, PerfTier::Medium, PerfTier::Low] {
        let preset = tier.preset();
        for _ in 0..200 {
            let spec = sample_particle(&mut rng, &preset);
            assert!((330..370).contains(&spec.hue));
            assert!((85..95).contains(&spec.saturation));
            assert!((58..68).contains(&spec.lightness));
            assert!(spec.size_px >= 16.0 && spec.size_px < 30.0);
            assert!(spec.drift_px >= -20.0 && spec.drift_px < 20.0);
            assert!(spec.scale >= 1.0 && spec.scale < 1.4);
            assert!(
                (preset.duration_ms.0..=preset.duration_ms.1).contains(&spec.duration_ms),
                "duration {} outside preset range",
                spec.duration_ms
            );
        }
    }
}

#[test]
fn burst_counts_stay_inside_preset_and_hard_bounds() {
    let mut rng = StdRng::seed_from_u64(11);
    for tier in [PerfTier::High, PerfTier::Medium, PerfTier::Low] {
        let preset = tier.preset();
        for _ in 0..200 {
            let n = burst_count(&mut rng, &preset);
            assert!((preset.burst.0..=preset.burst.1).contains(&n));
            assert!((BURST_MIN..=BURST_MAX).contains(&n));
        }
    }
}

#[test]
fn burst_requests_clamp_to_spawnable_range() {
    assert_eq!(clamp_burst(0), BURST_MIN);
    assert_eq!(clamp_burst(1), 1);
    assert_eq!(clamp_burst(12), 12);
    assert_eq!(clamp_burst(16), 16);
    assert_eq!(clamp_burst(1_000), BURST_MAX);
}
