//! Reference constants for the scoring model.
//!
//! Every normalization reference and weight lives here so recalibration
//! against real sensor data is a one-place change. The config structs in
//! this module's parent default to these values.

// ============================================================================
// Traffic fatigue
// ============================================================================

/// Default heavy-vehicle share of total traffic, used when a data source
/// only delivers total counts.
pub const HEAVY_VEHICLE_FRACTION: f64 = 0.15;

/// Total vehicles over the 14-day window that map the volume metric to 100.
pub const WINDOW_CAPACITY_VEHICLES: f64 = 300_000.0;

/// Heavy vehicles over the 14-day window that map the heavy metric to 100.
///
/// Deliberately much smaller than [`WINDOW_CAPACITY_VEHICLES`]: one heavy
/// vehicle moves its metric ~4.3x as far as a light vehicle moves the
/// volume metric, reflecting the disproportionate fatigue contribution.
pub const HEAVY_WINDOW_CAPACITY_VEHICLES: f64 = 70_000.0;

/// Weight of the aggregate volume metric in the traffic score.
pub const TRAFFIC_TOTAL_WEIGHT: f64 = 0.6;

/// Weight of the heavy-vehicle metric in the traffic score.
pub const TRAFFIC_HEAVY_WEIGHT: f64 = 0.4;

// ============================================================================
// Thermal stress
// ============================================================================

/// Temperature (°C) at or below which a forecast sample counts as freezing.
pub const FREEZE_THRESHOLD_C: f64 = 0.0;

/// Forecast minimum (°C) that maps the low-temperature component to 100.
pub const SEVERE_COLD_FLOOR_C: f64 = -15.0;

/// Forecast minimum (°C) that maps the low-temperature component to 0.
pub const MILD_CEILING_C: f64 = 15.0;

/// Temperature range (max − min, °C) that maps the variation component to 100.
pub const REFERENCE_VARIATION_C: f64 = 15.0;

/// Weight of the low-temperature component in the thermal score.
pub const THERMAL_LOW_TEMP_WEIGHT: f64 = 0.4;

/// Weight of the freeze-duration component in the thermal score.
pub const THERMAL_FREEZE_WEIGHT: f64 = 0.4;

/// Weight of the variation component in the thermal score.
pub const THERMAL_VARIATION_WEIGHT: f64 = 0.2;

// ============================================================================
// Noise anomaly
// ============================================================================

/// Minimum noise samples needed to split the window into two halves.
pub const NOISE_MIN_SAMPLES: usize = 14;

/// Score points per dB of week-over-week mean increase.
///
/// 6 points/dB puts a 5 dB increase at 30 and reaches full scale near a
/// 16.7 dB increase, well past any plausible joint-rattle signature.
pub const NOISE_POINTS_PER_DB: f64 = 6.0;

// ============================================================================
// Composite index
// ============================================================================

/// Weight of the traffic sub-score in the health index.
pub const INDEX_TRAFFIC_WEIGHT: f64 = 0.4;

/// Weight of the thermal sub-score in the health index.
pub const INDEX_THERMAL_WEIGHT: f64 = 0.4;

/// Weight of the noise sub-score in the health index.
pub const INDEX_NOISE_WEIGHT: f64 = 0.2;

/// Health index at or above this is Healthy.
pub const HEALTHY_THRESHOLD: f64 = 70.0;

/// Health index at or above this (and below Healthy) is Warning.
pub const WARNING_THRESHOLD: f64 = 50.0;

// ============================================================================
// Weather / acquisition
// ============================================================================

/// Roertunnel location, for the Open-Meteo forecast query.
pub const WEATHER_LATITUDE: f64 = 51.19;
pub const WEATHER_LONGITUDE: f64 = 5.99;

/// Forward forecast horizon (hours).
pub const FORECAST_HOURS: usize = 72;

/// Trailing observation window for traffic and noise (days).
pub const TRAILING_WINDOW_DAYS: usize = 14;

// ============================================================================
// Server
// ============================================================================

/// Default dashboard API bind address.
pub const SERVER_ADDR: &str = "0.0.0.0:8080";
