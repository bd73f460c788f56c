//! Open-Meteo forecast client.
//!
//! Fetches the hourly 2 m temperature forecast for the tunnel location and
//! maps it onto [`TemperatureSample`]s for the thermal calculator.

use chrono::NaiveDateTime;
use serde::Deserialize;
use tracing::debug;

use super::AcquisitionError;
use crate::config::WeatherConfig;
use crate::types::TemperatureSample;

const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com";

/// Hourly time format used by the Open-Meteo API (`2025-01-15T13:00`).
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

// ============================================================================
// Response payload
// ============================================================================

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    hourly: HourlyBlock,
}

#[derive(Debug, Deserialize)]
struct HourlyBlock {
    time: Vec<String>,
    temperature_2m: Vec<f64>,
}

// ============================================================================
// Client
// ============================================================================

/// HTTP client for the Open-Meteo forecast endpoint.
pub struct OpenMeteoClient {
    http: reqwest::Client,
    base_url: String,
    latitude: f64,
    longitude: f64,
    forecast_hours: usize,
}

impl OpenMeteoClient {
    /// Build a client for the configured location.
    pub fn new(config: &WeatherConfig) -> Result<Self, AcquisitionError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()?;
        Ok(Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            latitude: config.latitude,
            longitude: config.longitude,
            forecast_hours: config.forecast_hours,
        })
    }

    /// Override the endpoint (tests point this at a local stub).
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Fetch the forward temperature forecast, truncated to the configured
    /// horizon.
    pub async fn forecast(&self) -> Result<Vec<TemperatureSample>, AcquisitionError> {
        let response = self
            .http
            .get(format!("{}/v1/forecast", self.base_url))
            .query(&[
                ("latitude", self.latitude.to_string()),
                ("longitude", self.longitude.to_string()),
                ("hourly", "temperature_2m".to_string()),
                ("forecast_days", "3".to_string()),
                ("timezone", "UTC".to_string()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let payload: ForecastResponse = response.json().await?;
        debug!(
            hours = payload.hourly.time.len(),
            "Received Open-Meteo forecast"
        );
        parse_forecast(&payload, self.forecast_hours)
    }
}

/// Convert the raw payload into samples, enforcing the horizon and the
/// time/temperature pairing.
fn parse_forecast(
    payload: &ForecastResponse,
    forecast_hours: usize,
) -> Result<Vec<TemperatureSample>, AcquisitionError> {
    let hourly = &payload.hourly;
    if hourly.time.len() != hourly.temperature_2m.len() {
        return Err(AcquisitionError::Parse {
            context: "Open-Meteo forecast".to_string(),
            message: format!(
                "time and temperature arrays differ in length ({} vs {})",
                hourly.time.len(),
                hourly.temperature_2m.len()
            ),
        });
    }
    if hourly.time.is_empty() {
        return Err(AcquisitionError::Parse {
            context: "Open-Meteo forecast".to_string(),
            message: "empty hourly block".to_string(),
        });
    }

    hourly
        .time
        .iter()
        .zip(&hourly.temperature_2m)
        .take(forecast_hours)
        .map(|(time, &celsius)| {
            let naive = NaiveDateTime::parse_from_str(time, TIME_FORMAT).map_err(|e| {
                AcquisitionError::Parse {
                    context: "Open-Meteo forecast".to_string(),
                    message: format!("bad hourly time '{time}': {e}"),
                }
            })?;
            Ok(TemperatureSample {
                timestamp: naive.and_utc(),
                celsius,
            })
        })
        .collect()
}
