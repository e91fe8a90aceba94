//! Performance tiers and heart-particle parameters.

use rand::Rng;

/// Hard bounds on how many particles one pointer burst may create.
pub const BURST_MIN: u32 = 1;
pub const BURST_MAX: u32 = 16;

/// Named bundle of throttle interval, burst size range, live-particle
/// ceiling, and animation duration range for one performance tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TierPreset {
    pub throttle_ms: u64,
    pub burst: (u32, u32),
    pub max_alive: u32,
    pub duration_ms: (u64, u64),
}

const HIGH: TierPreset = TierPreset {
    throttle_ms: 120,
    burst: (10, 16),
    max_alive: 120,
    duration_ms: (1100, 2000),
};
const MEDIUM: TierPreset = TierPreset {
    throttle_ms: 200,
    burst: (6, 10),
    max_alive: 80,
    duration_ms: (900, 1600),
};
const LOW: TierPreset = TierPreset {
    throttle_ms: 280,
    burst: (4, 6),
    max_alive: 50,
    duration_ms: (700, 1200),
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PerfTier {
    #[default]
    High,
    Medium,
    Low,
}

impl PerfTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            PerfTier::High => "high",
            PerfTier::Medium => "medium",
            PerfTier::Low => "low",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "high" => Some(PerfTier::High),
            "medium" => Some(PerfTier::Medium),
            "low" => Some(PerfTier::Low),
            _ => None,
        }
    }

    /// Manual toggle order: high -> medium -> low -> high.
    pub fn next(self) -> Self {
        match self {
            PerfTier::High => PerfTier::Medium,
            PerfTier::Medium => PerfTier::Low,
            PerfTier::Low => PerfTier::High,
        }
    }

    pub const fn preset(self) -> TierPreset {
        match self {
            PerfTier::High => HIGH,
            PerfTier::Medium => MEDIUM,
            PerfTier::Low => LOW,
        }
    }
}

/// Capability signals sniffed from the browser, all optional.
#[derive(Clone, Debug, Default)]
pub struct DeviceSignals {
    pub save_data: bool,
    pub effective_type: Option<String>,
    pub device_memory_gb: Option<f64>,
    pub cpu_cores: Option<u32>,
}

impl DeviceSignals {
    fn constrained_network(&self) -> bool {
        self.save_data
            || self
                .effective_type
                .as_deref()
                .is_some_and(|t| t.contains("2g"))
    }

    fn constrained_hardware(&self) -> bool {
        self.device_memory_gb.is_some_and(|gb| gb <= 4.0)
            || self.cpu_cores.is_some_and(|cores| cores <= 4)
    }
}

/// Pick the tier for this session. A valid persisted choice always wins;
/// reduced motion forces `Low`; otherwise the network probe may step
/// `High` down to `Medium`, and the hardware probe steps down once more
/// from whatever the network probe left.
pub fn choose_tier(
    saved: Option<PerfTier>,
    reduced_motion: bool,
    signals: &DeviceSignals,
) -> PerfTier {
    if let Some(tier) = saved {
        return tier;
    }
    if reduced_motion {
        return PerfTier::Low;
    }
    let mut tier = PerfTier::High;
    if signals.constrained_network() {
        tier = PerfTier::Medium;
    }
    if signals.constrained_hardware() {
        tier = if tier == PerfTier::Medium {
            PerfTier::Low
        } else {
            PerfTier::Medium
        };
    }
    log::debug!(
        "[perf] heuristic tier {} (network={} hardware={})",
        tier.as_str(),
        signals.constrained_network(),
        signals.constrained_hardware()
    );
    tier
}

/// Live-particle counter with a tier-dependent ceiling.
///
/// Invariant: `alive` never exceeds the ceiling and never goes negative,
/// whatever order spawns and removals arrive in.
#[derive(Clone, Copy, Debug)]
pub struct ParticleBudget {
    alive: u32,
    ceiling: u32,
}

impl ParticleBudget {
    pub fn new(ceiling: u32) -> Self {
        Self { alive: 0, ceiling }
    }

    pub fn alive(&self) -> u32 {
        self.alive
    }

    pub fn ceiling(&self) -> u32 {
        self.ceiling
    }

    /// Particles already in flight stay; only new spawns see the new cap.
    pub fn set_ceiling(&mut self, ceiling: u32) {
        self.ceiling = ceiling;
    }

    pub fn try_spawn(&mut self) -> bool {
        if self.alive < self.ceiling {
            self.alive += 1;
            true
        } else {
            false
        }
    }

    pub fn on_removed(&mut self) {
        self.alive = self.alive.saturating_sub(1);
    }
}

/// One particle's randomized look: a pink-band HSL color, size, horizontal
/// drift, scale, and an animation duration from the active preset.
#[derive(Clone, Copy, Debug)]
pub struct ParticleSpec {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
    pub size_px: f32,
    pub drift_px: f32,
    pub scale: f32,
    pub duration_ms: u64,
}

pub fn sample_particle<R: Rng>(rng: &mut R, preset: &TierPreset) -> ParticleSpec {
    let (dur_lo, dur_hi) = preset.duration_ms;
    ParticleSpec {
        hue: rng.gen_range(330..370),
        saturation: rng.gen_range(85..95),
        lightness: rng.gen_range(58..68),
        size_px: 16.0 + rng.gen::<f32>() * 14.0,
        drift_px: (rng.gen::<f32>() - 0.5) * 40.0,
        scale: 1.0 + rng.gen::<f32>() * 0.4,
        duration_ms: rng.gen_range(dur_lo.min(dur_hi)..=dur_lo.max(dur_hi)),
    }
}

/// Burst size for one pointer-down, drawn from the preset's range.
pub fn burst_count<R: Rng>(rng: &mut R, preset: &TierPreset) -> u32 {
    let (lo, hi) = preset.burst;
    rng.gen_range(lo.min(hi)..=lo.max(hi)).clamp(BURST_MIN, BURST_MAX)
}

/// Clamp an externally supplied burst request to the spawnable range.
#[inline]
pub fn clamp_burst(count: u32) -> u32 {
    count.clamp(BURST_MIN, BURST_MAX)
}
