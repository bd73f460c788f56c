//! Joint configuration: every scoring weight and normalization reference as
//! an operator-tunable TOML value.
//!
//! Defaults match the constants in [`defaults`], so behaviour is unchanged
//! when no config file is present.
//!
//! ## Loading Order
//!
//! 1. `ROERTWIN_CONFIG` environment variable (path to TOML file)
//! 2. `joint_config.toml` in the current working directory
//! 3. Built-in defaults

pub mod defaults;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

// ============================================================================
// Sections
// ============================================================================

/// Joint identification, used in reports and logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JointInfo {
    pub name: String,
}

impl Default for JointInfo {
    fn default() -> Self {
        Self {
            name: "Roertunnel asphalt joint".to_string(),
        }
    }
}

/// Traffic fatigue calculator tuning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct TrafficConfig {
    /// Heavy-vehicle share of total traffic, in [0, 1]. Supplied per
    /// evaluation (the dashboard slider maps to this field) and consumed by
    /// adapters that only see total counts.
    pub heavy_vehicle_fraction: f64,
    /// Window total that maps the volume metric to 100.
    pub window_capacity_vehicles: f64,
    /// Window heavy total that maps the heavy metric to 100.
    pub heavy_window_capacity_vehicles: f64,
    pub total_weight: f64,
    pub heavy_weight: f64,
}

impl Default for TrafficConfig {
    fn default() -> Self {
        Self {
            heavy_vehicle_fraction: defaults::HEAVY_VEHICLE_FRACTION,
            window_capacity_vehicles: defaults::WINDOW_CAPACITY_VEHICLES,
            heavy_window_capacity_vehicles: defaults::HEAVY_WINDOW_CAPACITY_VEHICLES,
            total_weight: defaults::TRAFFIC_TOTAL_WEIGHT,
            heavy_weight: defaults::TRAFFIC_HEAVY_WEIGHT,
        }
    }
}

/// Thermal stress calculator tuning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ThermalConfig {
    pub freeze_threshold_c: f64,
    /// Forecast minimum that maps the low-temperature component to 100.
    pub severe_cold_floor_c: f64,
    /// Forecast minimum that maps the low-temperature component to 0.
    pub mild_ceiling_c: f64,
    /// Range (max − min) that maps the variation component to 100.
    pub reference_variation_c: f64,
    pub low_temp_weight: f64,
    pub freeze_weight: f64,
    pub variation_weight: f64,
}

impl Default for ThermalConfig {
    fn default() -> Self {
        Self {
            freeze_threshold_c: defaults::FREEZE_THRESHOLD_C,
            severe_cold_floor_c: defaults::SEVERE_COLD_FLOOR_C,
            mild_ceiling_c: defaults::MILD_CEILING_C,
            reference_variation_c: defaults::REFERENCE_VARIATION_C,
            low_temp_weight: defaults::THERMAL_LOW_TEMP_WEIGHT,
            freeze_weight: defaults::THERMAL_FREEZE_WEIGHT,
            variation_weight: defaults::THERMAL_VARIATION_WEIGHT,
        }
    }
}

/// Noise anomaly calculator tuning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    /// Minimum samples needed to split the window into two halves.
    pub min_samples: usize,
    /// Score points per dB of week-over-week mean increase.
    pub points_per_db: f64,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            min_samples: defaults::NOISE_MIN_SAMPLES,
            points_per_db: defaults::NOISE_POINTS_PER_DB,
        }
    }
}

/// Composite index weights and status thresholds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    pub traffic_weight: f64,
    pub thermal_weight: f64,
    pub noise_weight: f64,
    /// Index at or above this is Healthy.
    pub healthy_threshold: f64,
    /// Index at or above this (and below healthy) is Warning.
    pub warning_threshold: f64,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            traffic_weight: defaults::INDEX_TRAFFIC_WEIGHT,
            thermal_weight: defaults::INDEX_THERMAL_WEIGHT,
            noise_weight: defaults::INDEX_NOISE_WEIGHT,
            healthy_threshold: defaults::HEALTHY_THRESHOLD,
            warning_threshold: defaults::WARNING_THRESHOLD,
        }
    }
}

/// Forecast fetch location and horizon.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub forecast_hours: usize,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            latitude: defaults::WEATHER_LATITUDE,
            longitude: defaults::WEATHER_LONGITUDE,
            forecast_hours: defaults::FORECAST_HOURS,
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: defaults::SERVER_ADDR.to_string(),
        }
    }
}

// ============================================================================
// Top-level config
// ============================================================================

/// Root configuration for one joint deployment.
///
/// Load with [`JointConfig::load`], which searches `$ROERTWIN_CONFIG`, then
/// `./joint_config.toml`, then falls back to built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JointConfig {
    pub joint: JointInfo,
    pub traffic: TrafficConfig,
    pub thermal: ThermalConfig,
    pub noise: NoiseConfig,
    pub index: IndexConfig,
    pub weather: WeatherConfig,
    pub server: ServerConfig,
}

impl JointConfig {
    /// Load configuration using the standard search order.
    pub fn load() -> Self {
        if let Ok(path) = std::env::var("ROERTWIN_CONFIG") {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), joint = %config.joint.name, "Loaded config from ROERTWIN_CONFIG");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from ROERTWIN_CONFIG, falling back");
                    }
                }
            } else {
                warn!(path = %path, "ROERTWIN_CONFIG points to non-existent file, falling back");
            }
        }

        let local = PathBuf::from("joint_config.toml");
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!(joint = %config.joint.name, "Loaded config from ./joint_config.toml");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./joint_config.toml, using defaults");
                }
            }
        }

        info!("No joint_config.toml found, using built-in defaults");
        Self::default()
    }

    /// Load and validate a specific TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check internal consistency of the configuration.
    ///
    /// Weight groups must sum to 1 so the clamp invariant of every score is
    /// meaningful; reference capacities must be positive so normalization is
    /// well-defined.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.traffic;
        if !(0.0..=1.0).contains(&t.heavy_vehicle_fraction) {
            return Err(ConfigError::Invalid(format!(
                "traffic.heavy_vehicle_fraction must be in [0, 1], got {}",
                t.heavy_vehicle_fraction
            )));
        }
        if t.window_capacity_vehicles <= 0.0 || t.heavy_window_capacity_vehicles <= 0.0 {
            return Err(ConfigError::Invalid(
                "traffic window capacities must be positive".to_string(),
            ));
        }
        Self::check_weights(
            "traffic.total_weight + traffic.heavy_weight",
            &[t.total_weight, t.heavy_weight],
        )?;

        let th = &self.thermal;
        if th.severe_cold_floor_c >= th.mild_ceiling_c {
            return Err(ConfigError::Invalid(format!(
                "thermal.severe_cold_floor_c ({}) must be below thermal.mild_ceiling_c ({})",
                th.severe_cold_floor_c, th.mild_ceiling_c
            )));
        }
        if th.reference_variation_c <= 0.0 {
            return Err(ConfigError::Invalid(
                "thermal.reference_variation_c must be positive".to_string(),
            ));
        }
        Self::check_weights(
            "thermal low/freeze/variation weights",
            &[th.low_temp_weight, th.freeze_weight, th.variation_weight],
        )?;

        if self.noise.min_samples < 2 {
            return Err(ConfigError::Invalid(
                "noise.min_samples must be at least 2 to form two halves".to_string(),
            ));
        }
        if self.noise.points_per_db <= 0.0 {
            return Err(ConfigError::Invalid(
                "noise.points_per_db must be positive".to_string(),
            ));
        }

        let ix = &self.index;
        Self::check_weights(
            "index traffic/thermal/noise weights",
            &[ix.traffic_weight, ix.thermal_weight, ix.noise_weight],
        )?;
        if ix.warning_threshold >= ix.healthy_threshold {
            return Err(ConfigError::Invalid(format!(
                "index.warning_threshold ({}) must be below index.healthy_threshold ({})",
                ix.warning_threshold, ix.healthy_threshold
            )));
        }

        if self.weather.forecast_hours == 0 {
            return Err(ConfigError::Invalid(
                "weather.forecast_hours must be positive".to_string(),
            ));
        }

        Ok(())
    }

    fn check_weights(label: &str, weights: &[f64]) -> Result<(), ConfigError> {
        if weights.iter().any(|w| *w < 0.0) {
            return Err(ConfigError::Invalid(format!(
                "{label} must all be non-negative"
            )));
        }
        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > 1e-9 {
            return Err(ConfigError::Invalid(format!(
                "{label} must sum to 1.0, got {sum}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        JointConfig::default().validate().expect("defaults valid");
    }

    #[test]
    fn rejects_fraction_outside_unit_interval() {
        let mut config = JointConfig::default();
        config.traffic.heavy_vehicle_fraction = 1.2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_weights_not_summing_to_one() {
        let mut config = JointConfig::default();
        config.index.noise_weight = 0.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_inverted_status_thresholds() {
        let mut config = JointConfig::default();
        config.index.warning_threshold = 80.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_toml_fills_missing_sections_with_defaults() {
        let config: JointConfig = toml::from_str(
            r#"
            [traffic]
            heavy_vehicle_fraction = 0.25
            "#,
        )
        .expect("parse");
        assert!((config.traffic.heavy_vehicle_fraction - 0.25).abs() < f64::EPSILON);
        assert!(
            (config.traffic.window_capacity_vehicles - defaults::WINDOW_CAPACITY_VEHICLES).abs()
                < f64::EPSILON
        );
        assert!((config.index.healthy_threshold - defaults::HEALTHY_THRESHOLD).abs() < f64::EPSILON);
    }
}
