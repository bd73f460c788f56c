//! Core data types for the joint digital twin.
//!
//! Sample types mirror what the acquisition adapters deliver; breakdown
//! structs expose the per-component detail the dashboard renders alongside
//! the composite index.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Input samples
// ============================================================================

/// One traffic count period (hourly in the reference deployment).
///
/// Counts are unsigned, so negative counts are unrepresentable by
/// construction. `heavy_vehicles <= total_vehicles` remains a runtime
/// precondition checked at calculator entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrafficSample {
    pub timestamp: DateTime<Utc>,
    pub total_vehicles: u32,
    pub heavy_vehicles: u32,
}

/// One noise level reading at the joint (dB).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseSample {
    pub timestamp: DateTime<Utc>,
    pub level_db: f64,
}

/// One forecast temperature reading (°C).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSample {
    pub timestamp: DateTime<Utc>,
    pub celsius: f64,
}

/// The three input series one evaluation cycle consumes.
///
/// Traffic and noise cover the trailing 14-day window; temperature covers
/// the 72-hour forward forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointInputs {
    pub traffic: Vec<TrafficSample>,
    pub noise: Vec<NoiseSample>,
    pub temperature: Vec<TemperatureSample>,
}

// ============================================================================
// Sub-score breakdowns
// ============================================================================

/// Traffic fatigue sub-score with its normalized inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrafficFatigue {
    /// Weighted sub-score, 0-100 (higher = worse).
    pub score: f64,
    /// Normalized aggregate volume, 0-100.
    pub total_metric: f64,
    /// Normalized heavy-vehicle volume, 0-100.
    pub heavy_metric: f64,
}

/// Thermal stress sub-score with its three components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThermalStress {
    /// Weighted sub-score, 0-100 (higher = worse).
    pub score: f64,
    /// Severity of the forecast minimum temperature, 0-100.
    pub low_temp_component: f64,
    /// Share of the window at or below freezing, 0-100.
    pub freeze_duration_component: f64,
    /// Normalized temperature range over the window, 0-100.
    pub variation_component: f64,
    /// Forecast minimum (°C), for display.
    pub min_temp_c: f64,
    /// Number of forecast samples at or below the freeze threshold.
    pub freeze_samples: usize,
}

/// Direction of the week-over-week noise trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseTrend {
    Increasing,
    Decreasing,
    Flat,
}

impl std::fmt::Display for NoiseTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Increasing => write!(f, "increasing"),
            Self::Decreasing => write!(f, "decreasing"),
            Self::Flat => write!(f, "flat"),
        }
    }
}

/// Noise anomaly sub-score plus the trend indicator the dashboard shows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseAnomaly {
    /// Weighted sub-score, 0-100 (higher = worse).
    pub score: f64,
    /// Mean(recent half) − mean(prior half), in dB.
    pub delta_db: f64,
    pub trend: NoiseTrend,
}

// ============================================================================
// Composite index
// ============================================================================

/// Discrete health classification of the composite index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    Healthy,
    Warning,
    Critical,
}

impl HealthStatus {
    /// Fixed maintenance advice for each status.
    pub const fn recommendation(self) -> &'static str {
        match self {
            Self::Healthy => "No maintenance required. Continue monitoring.",
            Self::Warning => "Joint degradation likely. Plan inspection or maintenance window.",
            Self::Critical => "Preventive maintenance recommended within short term.",
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Healthy => write!(f, "Healthy"),
            Self::Warning => write!(f, "Warning"),
            Self::Critical => write!(f, "Critical"),
        }
    }
}

/// Composite health index, 0-100 (higher = better), with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthIndex {
    pub value: f64,
    pub status: HealthStatus,
}

/// Full output of one evaluation cycle.
///
/// A pure function of the inputs and configuration: re-evaluating with the
/// same inputs yields a bit-identical assessment. Timestamps belong to the
/// report renderer and the API envelope, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointAssessment {
    pub traffic: TrafficFatigue,
    pub thermal: ThermalStress,
    pub noise: NoiseAnomaly,
    pub health: HealthIndex,
    pub recommendation: String,
}
