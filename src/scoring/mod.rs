//! Scoring model: three independent stress calculators plus the health
//! aggregator.
//!
//! Deterministic, rule-based and stateless: one evaluation cycle is one
//! call to [`assess`], which reads the three immutable input series and
//! emits an immutable [`JointAssessment`]. Nothing is cached across cycles,
//! so re-evaluating identical inputs yields bit-identical output.
//!
//! Errors are detected at calculator entry and propagated unmodified; a
//! missing or malformed series never silently degrades into a default
//! score.

pub mod aggregate;
pub mod noise;
pub mod thermal;
pub mod traffic;
mod validate;

use thiserror::Error;

use crate::config::JointConfig;
use crate::types::{JointAssessment, JointInputs};

// ============================================================================
// Errors
// ============================================================================

/// Failure modes of the scoring model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// Series shorter than the minimum its calculator requires.
    #[error("insufficient data: {series} series has {actual} samples, needs at least {required}")]
    InsufficientData {
        series: &'static str,
        required: usize,
        actual: usize,
    },

    /// Malformed input: count bounds violated, non-monotonic timestamps,
    /// non-finite readings, or a fraction outside [0, 1].
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

// ============================================================================
// Helpers shared by the calculators
// ============================================================================

/// Bound a score to the [0, 100] scale.
pub(crate) fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

// ============================================================================
// Evaluation chain
// ============================================================================

/// Run one full evaluation cycle: three calculators, then the aggregator.
///
/// The calculators are mutually independent; order is irrelevant. Any
/// upstream error surfaces unchanged and no `JointAssessment` is produced.
pub fn assess(
    inputs: &JointInputs,
    config: &JointConfig,
) -> Result<JointAssessment, ScoringError> {
    validate::ensure_unit_fraction(
        config.traffic.heavy_vehicle_fraction,
        "traffic.heavy_vehicle_fraction",
    )?;

    let traffic = traffic::traffic_fatigue(&inputs.traffic, &config.traffic)?;
    let thermal = thermal::thermal_stress(&inputs.temperature, &config.thermal)?;
    let noise = noise::noise_anomaly(&inputs.noise, &config.noise)?;

    let health = aggregate::aggregate(traffic.score, thermal.score, noise.score, &config.index);

    Ok(JointAssessment {
        traffic,
        thermal,
        noise,
        health,
        recommendation: health.status.recommendation().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NoiseSample, TemperatureSample, TrafficSample};
    use chrono::{Duration, TimeZone, Utc};

    fn inputs() -> JointInputs {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).single().expect("valid date");
        JointInputs {
            traffic: (0..14)
                .map(|i| TrafficSample {
                    timestamp: start + Duration::days(i),
                    total_vehicles: 10_000,
                    heavy_vehicles: 1_500,
                })
                .collect(),
            noise: (0..14)
                .map(|i| NoiseSample {
                    timestamp: start + Duration::days(i),
                    level_db: 80.0,
                })
                .collect(),
            temperature: (0..72)
                .map(|i| TemperatureSample {
                    timestamp: start + Duration::hours(i),
                    celsius: 8.0,
                })
                .collect(),
        }
    }

    #[test]
    fn assessment_is_bit_identical_across_evaluations() {
        let inputs = inputs();
        let config = JointConfig::default();
        let first = assess(&inputs, &config).expect("assess");
        let second = assess(&inputs, &config).expect("assess");
        assert_eq!(first, second);
    }

    #[test]
    fn all_scores_stay_in_range() {
        let assessment = assess(&inputs(), &JointConfig::default()).expect("assess");
        for score in [
            assessment.traffic.score,
            assessment.thermal.score,
            assessment.noise.score,
            assessment.health.value,
        ] {
            assert!((0.0..=100.0).contains(&score), "score out of range: {score}");
        }
    }

    #[test]
    fn fraction_outside_unit_interval_is_rejected() {
        let mut config = JointConfig::default();
        config.traffic.heavy_vehicle_fraction = -0.1;
        let err = assess(&inputs(), &config).expect_err("must fail");
        assert!(matches!(err, ScoringError::InvalidInput(_)));
    }
}
