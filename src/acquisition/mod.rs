//! Input adapters: everything that produces the three series the scoring
//! model consumes.
//!
//! The core never talks to a file, a socket, or a random number generator;
//! it sees only [`JointInputs`]. Adapters behind the [`InputProvider`] trait
//! handle format parsing and transport, so the evaluation chain stays
//! synchronous and pure.

pub mod csv_source;
pub mod mock;
pub mod open_meteo;

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

use crate::types::JointInputs;
use mock::MockScenario;
use open_meteo::OpenMeteoClient;

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Error)]
pub enum AcquisitionError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {context}: {message}")]
    Parse { context: String, message: String },

    #[error("forecast request failed: {0}")]
    Http(#[from] reqwest::Error),
}

// ============================================================================
// Provider trait
// ============================================================================

/// Source of one evaluation cycle's inputs.
///
/// `fetch` assembles fresh series on every call; the "recalculate" trigger
/// is simply another invocation, never a cache read.
#[async_trait]
pub trait InputProvider: Send + Sync {
    async fn fetch(&self) -> Result<JointInputs, AcquisitionError>;

    /// Human-readable name for logging (e.g. "mock", "field").
    fn provider_name(&self) -> &'static str;
}

// ============================================================================
// Field provider
// ============================================================================

/// Production-shaped provider: traffic from a counts CSV, temperature from
/// the Open-Meteo forecast, noise from the synthetic generator (no real
/// microphone feed is wired up).
///
/// Any piece without a live source falls back to the nominal mock series so
/// a partial deployment still produces a full assessment.
pub struct FieldProvider {
    traffic_csv: Option<PathBuf>,
    weather: Option<OpenMeteoClient>,
    heavy_fraction: f64,
    seed: u64,
}

impl FieldProvider {
    pub const fn new(
        traffic_csv: Option<PathBuf>,
        weather: Option<OpenMeteoClient>,
        heavy_fraction: f64,
        seed: u64,
    ) -> Self {
        Self {
            traffic_csv,
            weather,
            heavy_fraction,
            seed,
        }
    }
}

#[async_trait]
impl InputProvider for FieldProvider {
    async fn fetch(&self) -> Result<JointInputs, AcquisitionError> {
        let window_end = mock::window_anchor();

        let traffic = match &self.traffic_csv {
            Some(path) => {
                let samples = csv_source::load_traffic_csv(path, self.heavy_fraction)?;
                info!(path = %path.display(), samples = samples.len(), "Loaded traffic counts from CSV");
                samples
            }
            None => mock::traffic_series(
                MockScenario::Nominal,
                self.seed,
                window_end,
                self.heavy_fraction,
            ),
        };

        let temperature = match &self.weather {
            Some(client) => {
                let samples = client.forecast().await?;
                info!(samples = samples.len(), "Fetched temperature forecast");
                samples
            }
            None => mock::temperature_series(MockScenario::Nominal, self.seed, window_end),
        };

        let noise = mock::noise_series(MockScenario::Nominal, self.seed, window_end);

        Ok(JointInputs {
            traffic,
            noise,
            temperature,
        })
    }

    fn provider_name(&self) -> &'static str {
        "field"
    }
}
