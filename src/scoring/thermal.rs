//! Thermal Stress calculator.
//!
//! Three components over the 72-hour forecast window: severity of the
//! minimum temperature (linear between a severe-cold floor and a mild
//! ceiling), share of the window at or below freezing, and normalized
//! temperature range. Weighted 0.4 / 0.4 / 0.2.

use super::{clamp_score, validate, ScoringError};
use crate::config::ThermalConfig;
use crate::types::{TemperatureSample, ThermalStress};

/// Compute the thermal stress sub-score over the forecast window.
///
/// # Errors
///
/// `InsufficientData` for an empty forecast; `InvalidInput` for
/// non-monotonic timestamps or non-finite readings.
pub fn thermal_stress(
    samples: &[TemperatureSample],
    config: &ThermalConfig,
) -> Result<ThermalStress, ScoringError> {
    validate::ensure_min_len("temperature", samples.len(), 1)?;
    validate::ensure_monotonic("temperature", samples)?;
    validate::ensure_finite("temperature", samples.iter().map(|s| s.celsius))?;

    let min_temp_c = samples
        .iter()
        .map(|s| s.celsius)
        .fold(f64::INFINITY, f64::min);
    let max_temp_c = samples
        .iter()
        .map(|s| s.celsius)
        .fold(f64::NEG_INFINITY, f64::max);

    let low_temp_component = low_temp_severity(min_temp_c, config);

    let freeze_samples = samples
        .iter()
        .filter(|s| s.celsius <= config.freeze_threshold_c)
        .count();
    #[allow(clippy::cast_precision_loss)]
    let freeze_duration_component =
        clamp_score(freeze_samples as f64 / samples.len() as f64 * 100.0);

    let variation_component =
        clamp_score((max_temp_c - min_temp_c) / config.reference_variation_c * 100.0);

    let score = combine(
        low_temp_component,
        freeze_duration_component,
        variation_component,
        config,
    );

    Ok(ThermalStress {
        score,
        low_temp_component,
        freeze_duration_component,
        variation_component,
        min_temp_c,
        freeze_samples,
    })
}

/// Linear severity of the forecast minimum: 100 at the severe-cold floor,
/// 0 at the mild ceiling.
fn low_temp_severity(min_temp_c: f64, config: &ThermalConfig) -> f64 {
    let span = config.mild_ceiling_c - config.severe_cold_floor_c;
    clamp_score((config.mild_ceiling_c - min_temp_c) / span * 100.0)
}

/// Weighted combination of the three components, clamped to [0, 100].
fn combine(low: f64, freeze: f64, variation: f64, config: &ThermalConfig) -> f64 {
    clamp_score(
        config.low_temp_weight * low
            + config.freeze_weight * freeze
            + config.variation_weight * variation,
    )
}
