//! Deterministic synthetic series generators.
//!
//! Stand-ins for the loop counters, the joint microphone, and the weather
//! feed. Every generator is a pure function of (scenario, seed, window
//! anchor), so a fixed seed reproduces the exact same evaluation across
//! reruns.

use async_trait::async_trait;
use chrono::{DateTime, Duration, DurationRound, Timelike, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal, Uniform};
use std::str::FromStr;

use super::{AcquisitionError, InputProvider};
use crate::config::defaults;
use crate::types::{JointInputs, NoiseSample, TemperatureSample, TrafficSample};

/// Hourly samples in the trailing window (14 days).
const TRAILING_SAMPLES: usize = defaults::TRAILING_WINDOW_DAYS * 24;

// ============================================================================
// Scenarios
// ============================================================================

/// Which signal the synthetic deployment biases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockScenario {
    /// Typical tunnel week: moderate traffic, mild weather, stable noise.
    Nominal,
    /// Sustained peak volumes with a raised heavy-vehicle share.
    HeavyTraffic,
    /// Sub-zero forecast with large day/night swings.
    ColdSnap,
    /// Noise floor rising through the recent week (joint starting to rattle).
    NoisyJoint,
}

impl FromStr for MockScenario {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nominal" => Ok(Self::Nominal),
            "heavy-traffic" | "heavy_traffic" => Ok(Self::HeavyTraffic),
            "cold-snap" | "cold_snap" => Ok(Self::ColdSnap),
            "noisy-joint" | "noisy_joint" => Ok(Self::NoisyJoint),
            other => Err(format!(
                "unknown scenario '{other}' (expected nominal, heavy-traffic, cold-snap or noisy-joint)"
            )),
        }
    }
}

impl std::fmt::Display for MockScenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nominal => write!(f, "nominal"),
            Self::HeavyTraffic => write!(f, "heavy-traffic"),
            Self::ColdSnap => write!(f, "cold-snap"),
            Self::NoisyJoint => write!(f, "noisy-joint"),
        }
    }
}

// ============================================================================
// Generators
// ============================================================================

/// Current time truncated to the hour; the boundary between the trailing
/// window and the forecast window.
pub fn window_anchor() -> DateTime<Utc> {
    let now = Utc::now();
    now.duration_trunc(Duration::hours(1)).unwrap_or(now)
}

/// 14 days of hourly traffic counts ending at `window_end`.
///
/// Diurnal sinusoid around a scenario-dependent base volume, with Gaussian
/// jitter. Heavy counts are derived from totals via `heavy_fraction`, the
/// way the loop counters report class splits.
pub fn traffic_series(
    scenario: MockScenario,
    seed: u64,
    window_end: DateTime<Utc>,
    heavy_fraction: f64,
) -> Vec<TrafficSample> {
    let mut rng = StdRng::seed_from_u64(seed);
    // Constant std dev, construction cannot fail.
    #[allow(clippy::expect_used)]
    let jitter = Normal::new(0.0, 40.0).expect("valid normal distribution");

    let (base, fraction) = match scenario {
        MockScenario::HeavyTraffic => (1050.0, (heavy_fraction * 1.6).min(1.0)),
        _ => (550.0, heavy_fraction),
    };

    let start = window_end - Duration::hours(TRAILING_SAMPLES as i64);
    (0..TRAILING_SAMPLES)
        .map(|i| {
            let timestamp = start + Duration::hours(i as i64 + 1);
            let hour = f64::from(timestamp.hour());
            // Quiet nights, busy afternoons.
            let diurnal = 1.0 + 0.75 * ((hour - 15.0) / 24.0 * std::f64::consts::TAU).cos();
            let total = (base * diurnal + jitter.sample(&mut rng)).max(0.0);
            let heavy = total * fraction;
            TrafficSample {
                timestamp,
                total_vehicles: total.round() as u32,
                heavy_vehicles: heavy.round().min(total.round()) as u32,
            }
        })
        .collect()
}

/// 14 days of hourly noise levels ending at `window_end`.
///
/// Uniform 70-90 dB floor; the noisy-joint scenario ramps the recent week
/// upward so the week-over-week delta turns positive.
pub fn noise_series(
    scenario: MockScenario,
    seed: u64,
    window_end: DateTime<Utc>,
) -> Vec<NoiseSample> {
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(1));
    let floor = Uniform::new(70.0, 90.0);

    let start = window_end - Duration::hours(TRAILING_SAMPLES as i64);
    (0..TRAILING_SAMPLES)
        .map(|i| {
            let mut level_db = floor.sample(&mut rng);
            if scenario == MockScenario::NoisyJoint && i >= TRAILING_SAMPLES / 2 {
                // Linear ramp up to +6 dB by the end of the window.
                let progress =
                    (i - TRAILING_SAMPLES / 2) as f64 / (TRAILING_SAMPLES / 2) as f64;
                level_db += 6.0 * progress;
            }
            NoiseSample {
                timestamp: start + Duration::hours(i as i64 + 1),
                level_db,
            }
        })
        .collect()
}

/// 72 hours of forecast temperatures starting just after `window_end`.
///
/// Daily sinusoid with Gaussian jitter; the cold-snap scenario drops the
/// base below freezing and widens the swing.
pub fn temperature_series(
    scenario: MockScenario,
    seed: u64,
    window_end: DateTime<Utc>,
) -> Vec<TemperatureSample> {
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(2));
    // Constant std dev, construction cannot fail.
    #[allow(clippy::expect_used)]
    let jitter = Normal::new(0.0, 0.6).expect("valid normal distribution");

    let (base, amplitude) = match scenario {
        MockScenario::ColdSnap => (-5.0, 6.0),
        _ => (8.0, 3.5),
    };

    (0..defaults::FORECAST_HOURS)
        .map(|i| {
            let timestamp = window_end + Duration::hours(i as i64 + 1);
            let phase = (i as f64 - 14.0) / 24.0 * std::f64::consts::TAU;
            TemperatureSample {
                timestamp,
                celsius: base + amplitude * phase.cos() + jitter.sample(&mut rng),
            }
        })
        .collect()
}

// ============================================================================
// Provider
// ============================================================================

/// Fully synthetic input provider.
pub struct MockProvider {
    scenario: MockScenario,
    seed: u64,
    heavy_fraction: f64,
}

impl MockProvider {
    pub const fn new(scenario: MockScenario, seed: u64, heavy_fraction: f64) -> Self {
        Self {
            scenario,
            seed,
            heavy_fraction,
        }
    }
}

#[async_trait]
impl InputProvider for MockProvider {
    async fn fetch(&self) -> Result<JointInputs, AcquisitionError> {
        let window_end = window_anchor();
        Ok(JointInputs {
            traffic: traffic_series(self.scenario, self.seed, window_end, self.heavy_fraction),
            noise: noise_series(self.scenario, self.seed, window_end),
            temperature: temperature_series(self.scenario, self.seed, window_end),
        })
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).single().expect("valid date")
    }

    #[test]
    fn generators_are_deterministic_per_seed() {
        let a = traffic_series(MockScenario::Nominal, 42, anchor(), 0.15);
        let b = traffic_series(MockScenario::Nominal, 42, anchor(), 0.15);
        let c = traffic_series(MockScenario::Nominal, 43, anchor(), 0.15);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn series_lengths_match_the_windows() {
        assert_eq!(traffic_series(MockScenario::Nominal, 42, anchor(), 0.15).len(), 336);
        assert_eq!(noise_series(MockScenario::Nominal, 42, anchor()).len(), 336);
        assert_eq!(temperature_series(MockScenario::Nominal, 42, anchor()).len(), 72);
    }

    #[test]
    fn heavy_counts_never_exceed_totals() {
        for scenario in [MockScenario::Nominal, MockScenario::HeavyTraffic] {
            for sample in traffic_series(scenario, 7, anchor(), 0.95) {
                assert!(sample.heavy_vehicles <= sample.total_vehicles);
            }
        }
    }

    #[test]
    fn cold_snap_forecast_dips_below_freezing() {
        let min = temperature_series(MockScenario::ColdSnap, 42, anchor())
            .iter()
            .map(|s| s.celsius)
            .fold(f64::INFINITY, f64::min);
        assert!(min < 0.0, "cold snap minimum was {min}");
    }

    #[test]
    fn noisy_joint_raises_the_recent_week() {
        let samples = noise_series(MockScenario::NoisyJoint, 42, anchor());
        let (prior, recent) = samples.split_at(samples.len() / 2);
        let prior_mean: f64 =
            prior.iter().map(|s| s.level_db).sum::<f64>() / prior.len() as f64;
        let recent_mean: f64 =
            recent.iter().map(|s| s.level_db).sum::<f64>() / recent.len() as f64;
        assert!(recent_mean > prior_mean + 1.0);
    }

    #[test]
    fn timestamps_are_strictly_increasing() {
        let samples = noise_series(MockScenario::Nominal, 42, anchor());
        for pair in samples.windows(2) {
            assert!(pair[1].timestamp > pair[0].timestamp);
        }
    }

    #[test]
    fn scenario_names_round_trip() {
        for scenario in [
            MockScenario::Nominal,
            MockScenario::HeavyTraffic,
            MockScenario::ColdSnap,
            MockScenario::NoisyJoint,
        ] {
            let parsed: MockScenario =
                scenario.to_string().parse().expect("round trip");
            assert_eq!(parsed, scenario);
        }
    }
}
