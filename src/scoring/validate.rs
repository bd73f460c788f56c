//! Series preconditions shared by the calculators.
//!
//! Checks run at calculator entry; a violation stops the cycle before any
//! score is computed.

use chrono::{DateTime, Utc};

use super::ScoringError;
use crate::types::{NoiseSample, TemperatureSample, TrafficSample};

/// Anything carrying a sample timestamp.
pub(crate) trait Timestamped {
    fn timestamp(&self) -> DateTime<Utc>;
}

impl Timestamped for TrafficSample {
    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl Timestamped for NoiseSample {
    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl Timestamped for TemperatureSample {
    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Series must have at least `required` samples.
pub(crate) fn ensure_min_len(
    series: &'static str,
    actual: usize,
    required: usize,
) -> Result<(), ScoringError> {
    if actual < required {
        return Err(ScoringError::InsufficientData {
            series,
            required,
            actual,
        });
    }
    Ok(())
}

/// Timestamps must be strictly increasing.
pub(crate) fn ensure_monotonic<T: Timestamped>(
    series: &'static str,
    samples: &[T],
) -> Result<(), ScoringError> {
    for pair in samples.windows(2) {
        if pair[1].timestamp() <= pair[0].timestamp() {
            return Err(ScoringError::InvalidInput(format!(
                "{series} series timestamps are not strictly increasing at {}",
                pair[1].timestamp()
            )));
        }
    }
    Ok(())
}

/// Readings must be finite (no NaN or infinities from upstream parsing).
pub(crate) fn ensure_finite(
    series: &'static str,
    values: impl Iterator<Item = f64>,
) -> Result<(), ScoringError> {
    for value in values {
        if !value.is_finite() {
            return Err(ScoringError::InvalidInput(format!(
                "{series} series contains a non-finite reading"
            )));
        }
    }
    Ok(())
}

/// A fraction parameter must lie in [0, 1].
pub(crate) fn ensure_unit_fraction(value: f64, name: &str) -> Result<(), ScoringError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ScoringError::InvalidInput(format!(
            "{name} must be in [0, 1], got {value}"
        )));
    }
    Ok(())
}
