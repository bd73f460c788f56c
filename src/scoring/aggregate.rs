//! Health Aggregator.
//!
//! Folds the three sub-scores into one bounded index and classifies it.
//! Total over its domain: any three sub-scores in [0, 100] produce a valid
//! index, so the only failures a caller can see come from the upstream
//! calculators.

use super::clamp_score;
use crate::config::IndexConfig;
use crate::types::{HealthIndex, HealthStatus};

/// Combine the three sub-scores into the composite health index.
///
/// `value = clamp(100 − w_t · traffic − w_th · thermal − w_n · noise, 0, 100)`
pub fn aggregate(
    traffic_score: f64,
    thermal_score: f64,
    noise_score: f64,
    config: &IndexConfig,
) -> HealthIndex {
    let value = clamp_score(
        100.0
            - config.traffic_weight * traffic_score
            - config.thermal_weight * thermal_score
            - config.noise_weight * noise_score,
    );
    HealthIndex {
        value,
        status: classify(value, config),
    }
}

/// Classify an index value against the status thresholds (both inclusive at
/// their lower bound).
pub fn classify(value: f64, config: &IndexConfig) -> HealthStatus {
    if value >= config.healthy_threshold {
        HealthStatus::Healthy
    } else if value >= config.warning_threshold {
        HealthStatus::Warning
    } else {
        HealthStatus::Critical
    }
}
