//! Assessment Regression Tests
//!
//! Exercises the full evaluation chain (adapters → calculators →
//! aggregator) with synthetic series. Asserts the worked reference
//! scenario, the clamp and idempotence invariants, and error propagation
//! when a series is too short.

use chrono::{Duration, TimeZone, Utc};

use roertwin::acquisition::mock::{MockProvider, MockScenario};
use roertwin::acquisition::InputProvider;
use roertwin::config::JointConfig;
use roertwin::{
    assess, HealthStatus, JointInputs, NoiseSample, NoiseTrend, ScoringError, TemperatureSample,
    TrafficSample,
};

fn start() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0)
        .single()
        .expect("valid date")
}

/// 14 daily traffic samples summing to the given window totals.
fn traffic_window(total_sum: u32, heavy_sum: u32) -> Vec<TrafficSample> {
    (0..14)
        .map(|i| TrafficSample {
            timestamp: start() + Duration::days(i),
            total_vehicles: total_sum / 14 + u32::from(i == 0) * (total_sum % 14),
            heavy_vehicles: heavy_sum / 14 + u32::from(i == 0) * (heavy_sum % 14),
        })
        .collect()
}

fn noise_window(prior_db: f64, recent_db: f64) -> Vec<NoiseSample> {
    (0..14)
        .map(|i| NoiseSample {
            timestamp: start() + Duration::days(i),
            level_db: if i < 7 { prior_db } else { recent_db },
        })
        .collect()
}

fn forecast(temps: &[f64]) -> Vec<TemperatureSample> {
    temps
        .iter()
        .enumerate()
        .map(|(i, &celsius)| TemperatureSample {
            timestamp: start() + Duration::hours(i as i64),
            celsius,
        })
        .collect()
}

/// The worked scenario: traffic 62, thermal 78, noise 30 → index 38,
/// status Critical.
#[test]
fn reference_scenario_end_to_end() {
    // Traffic: 150k of 300k total (metric 50), 56k of 70k heavy (metric 80).
    let traffic = traffic_window(150_000, 56_000);

    // Thermal: min -12 °C (low severity 90), all 72 h at or below freezing
    // (freeze 100), range 1.5 °C (variation 10).
    let mut temps = vec![-12.0];
    temps.extend(vec![-10.5; 71]);
    let temperature = forecast(&temps);

    // Noise: +5 dB week over week (score 30).
    let noise = noise_window(50.0, 55.0);

    let inputs = JointInputs {
        traffic,
        noise,
        temperature,
    };
    let assessment = assess(&inputs, &JointConfig::default()).expect("assess");

    assert!((assessment.traffic.score - 62.0).abs() < 1e-9);
    assert!((assessment.thermal.score - 78.0).abs() < 1e-9);
    assert!((assessment.noise.score - 30.0).abs() < 1e-9);
    assert_eq!(assessment.noise.trend, NoiseTrend::Increasing);

    // 100 − 0.4·62 − 0.4·78 − 0.2·30 = 38
    assert!((assessment.health.value - 38.0).abs() < 1e-9);
    assert_eq!(assessment.health.status, HealthStatus::Critical);
    assert!(assessment
        .recommendation
        .contains("Preventive maintenance"));
}

/// Quiet joint: zero stress on all three signals → index 100, Healthy.
#[test]
fn zero_stress_boundary_scenario() {
    let inputs = JointInputs {
        traffic: traffic_window(0, 0),
        noise: noise_window(80.0, 80.0),
        // Warm enough that even the low-temperature component is zero.
        temperature: forecast(&[15.0; 72]),
    };
    let assessment = assess(&inputs, &JointConfig::default()).expect("assess");

    assert!((assessment.traffic.score - 0.0).abs() < f64::EPSILON);
    assert!((assessment.thermal.score - 0.0).abs() < f64::EPSILON);
    assert!((assessment.noise.score - 0.0).abs() < f64::EPSILON);
    assert_eq!(assessment.noise.trend, NoiseTrend::Flat);
    assert!((assessment.health.value - 100.0).abs() < f64::EPSILON);
    assert_eq!(assessment.health.status, HealthStatus::Healthy);
    assert!(assessment
        .recommendation
        .starts_with("No maintenance required"));
}

/// A 10-sample noise series stops the cycle; no index is produced.
#[test]
fn short_noise_series_propagates_insufficient_data() {
    let inputs = JointInputs {
        traffic: traffic_window(150_000, 20_000),
        noise: noise_window(80.0, 80.0).into_iter().take(10).collect(),
        temperature: forecast(&[8.0; 72]),
    };
    let err = assess(&inputs, &JointConfig::default()).expect_err("must fail");
    assert_eq!(
        err,
        ScoringError::InsufficientData {
            series: "noise",
            required: 14,
            actual: 10
        }
    );
}

/// Clamp invariant holds even for absurd synthetic inputs.
#[test]
fn extreme_inputs_stay_bounded() {
    let inputs = JointInputs {
        traffic: traffic_window(40_000_000, 20_000_000),
        noise: noise_window(40.0, 140.0),
        temperature: forecast(&[-60.0; 72]),
    };
    let assessment = assess(&inputs, &JointConfig::default()).expect("assess");
    for score in [
        assessment.traffic.score,
        assessment.thermal.score,
        assessment.noise.score,
        assessment.health.value,
    ] {
        assert!((0.0..=100.0).contains(&score), "score out of range: {score}");
    }
    assert_eq!(assessment.health.status, HealthStatus::Critical);
}

/// The mock provider feeds the chain end to end, deterministically.
#[tokio::test]
async fn mock_provider_round_trip_is_deterministic() {
    let provider = MockProvider::new(MockScenario::Nominal, 42, 0.15);
    let config = JointConfig::default();

    let inputs = provider.fetch().await.expect("fetch");
    let first = assess(&inputs, &config).expect("assess");
    let second = assess(&inputs, &config).expect("assess");
    assert_eq!(first, second);

    assert!((0.0..=100.0).contains(&first.health.value));
}

/// Scenario generators bias the signal they claim to.
#[tokio::test]
async fn degradation_scenarios_score_worse_than_nominal() {
    let config = JointConfig::default();
    let nominal_inputs = MockProvider::new(MockScenario::Nominal, 42, 0.15)
        .fetch()
        .await
        .expect("fetch");
    let nominal = assess(&nominal_inputs, &config).expect("assess");

    let cold_inputs = MockProvider::new(MockScenario::ColdSnap, 42, 0.15)
        .fetch()
        .await
        .expect("fetch");
    let cold = assess(&cold_inputs, &config).expect("assess");
    assert!(cold.thermal.score > nominal.thermal.score);
    assert!(cold.health.value < nominal.health.value);

    let noisy_inputs = MockProvider::new(MockScenario::NoisyJoint, 42, 0.15)
        .fetch()
        .await
        .expect("fetch");
    let noisy = assess(&noisy_inputs, &config).expect("assess");
    assert_eq!(noisy.noise.trend, NoiseTrend::Increasing);
    assert!(noisy.noise.score > nominal.noise.score);
}
