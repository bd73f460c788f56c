//! Noise Anomaly calculator.
//!
//! Splits the trailing window at its midpoint into a prior and a recent
//! half, compares their mean levels, and maps a positive week-over-week
//! increase linearly onto the score. The sign of the delta doubles as the
//! trend indicator shown next to the gauge.

use statrs::statistics::Statistics;

use super::{clamp_score, validate, ScoringError};
use crate::config::NoiseConfig;
use crate::types::{NoiseAnomaly, NoiseSample, NoiseTrend};

/// Compute the noise anomaly sub-score over the trailing window.
///
/// # Errors
///
/// `InsufficientData` when the series cannot be split into two halves of at
/// least `min_samples / 2` points; `InvalidInput` for non-monotonic
/// timestamps or non-finite levels.
pub fn noise_anomaly(
    samples: &[NoiseSample],
    config: &NoiseConfig,
) -> Result<NoiseAnomaly, ScoringError> {
    validate::ensure_min_len("noise", samples.len(), config.min_samples)?;
    validate::ensure_monotonic("noise", samples)?;
    validate::ensure_finite("noise", samples.iter().map(|s| s.level_db))?;

    // Contiguous, non-overlapping halves; the recent half keeps the extra
    // sample when the window length is odd.
    let (prior, recent) = samples.split_at(samples.len() / 2);
    let prior_mean = prior.iter().map(|s| s.level_db).mean();
    let recent_mean = recent.iter().map(|s| s.level_db).mean();
    let delta_db = recent_mean - prior_mean;

    let trend = match delta_db.partial_cmp(&0.0) {
        Some(std::cmp::Ordering::Greater) => NoiseTrend::Increasing,
        Some(std::cmp::Ordering::Less) => NoiseTrend::Decreasing,
        _ => NoiseTrend::Flat,
    };

    let score = clamp_score(delta_db * config.points_per_db);

    Ok(NoiseAnomaly {
        score,
        delta_db,
        trend,
    })
}
