//! Traffic Fatigue calculator.
//!
//! Normalizes aggregate and heavy-vehicle volume over the trailing window
//! against reference capacities and combines them with fixed weights. The
//! heavy reference capacity is deliberately much smaller than the total
//! one, so each heavy vehicle moves the score further than a light vehicle
//! and the asymmetry is the core fatigue rule.

use super::{clamp_score, validate, ScoringError};
use crate::config::TrafficConfig;
use crate::types::{TrafficFatigue, TrafficSample};

/// Compute the traffic fatigue sub-score over the trailing window.
///
/// # Errors
///
/// `InsufficientData` for an empty series; `InvalidInput` when a sample has
/// `heavy_vehicles > total_vehicles` or timestamps are not strictly
/// increasing.
pub fn traffic_fatigue(
    samples: &[TrafficSample],
    config: &TrafficConfig,
) -> Result<TrafficFatigue, ScoringError> {
    validate::ensure_min_len("traffic", samples.len(), 1)?;
    validate::ensure_monotonic("traffic", samples)?;
    for sample in samples {
        if sample.heavy_vehicles > sample.total_vehicles {
            return Err(ScoringError::InvalidInput(format!(
                "traffic sample at {} has heavy_vehicles ({}) > total_vehicles ({})",
                sample.timestamp, sample.heavy_vehicles, sample.total_vehicles
            )));
        }
    }

    let total_sum: f64 = samples.iter().map(|s| f64::from(s.total_vehicles)).sum();
    let heavy_sum: f64 = samples.iter().map(|s| f64::from(s.heavy_vehicles)).sum();

    let total_metric = clamp_score(total_sum / config.window_capacity_vehicles * 100.0);
    let heavy_metric = clamp_score(heavy_sum / config.heavy_window_capacity_vehicles * 100.0);

    let score = clamp_score(config.total_weight * total_metric + config.heavy_weight * heavy_metric);

    Ok(TrafficFatigue {
        score,
        total_metric,
        heavy_metric,
    })
}
