//! Dashboard API handlers.
//!
//! Each request runs a complete, fresh evaluation cycle; the core is
//! stateless and cheap, so "recalculate" is just another call. Scoring
//! errors surface as 422 with a stable code instead of a fabricated score.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

use super::envelope::{ApiErrorResponse, ApiResponse};
use crate::acquisition::{AcquisitionError, InputProvider};
use crate::config::JointConfig;
use crate::scoring::{self, ScoringError};
use crate::types::{JointAssessment, NoiseSample, TemperatureSample, TrafficSample};

/// Shared state behind the dashboard API.
pub struct DashboardState {
    pub provider: Arc<dyn InputProvider>,
    pub config: JointConfig,
}

/// Assessment plus the joint identification the dashboard header shows.
#[derive(Debug, Serialize)]
pub struct AssessmentPayload {
    pub joint: String,
    #[serde(flatten)]
    pub assessment: JointAssessment,
}

/// Body of `POST /api/v1/assess`: caller-supplied series, optionally with a
/// heavy-vehicle fraction override (the scenario slider).
#[derive(Debug, Deserialize)]
pub struct AssessRequest {
    pub traffic: Vec<TrafficSample>,
    pub noise: Vec<NoiseSample>,
    pub temperature: Vec<TemperatureSample>,
    #[serde(default)]
    pub heavy_vehicle_fraction: Option<f64>,
}

/// Liveness probe.
pub async fn healthz() -> Response {
    (StatusCode::OK, "ok").into_response()
}

/// Run an evaluation cycle against the configured input provider.
pub async fn get_assessment(State(state): State<Arc<DashboardState>>) -> Response {
    let inputs = match state.provider.fetch().await {
        Ok(inputs) => inputs,
        Err(e) => {
            warn!(provider = state.provider.provider_name(), error = %e, "Input acquisition failed");
            return acquisition_error_response(&e);
        }
    };

    match scoring::assess(&inputs, &state.config) {
        Ok(assessment) => {
            info!(
                health = assessment.health.value,
                status = %assessment.health.status,
                "Assessment complete"
            );
            ApiResponse::ok(AssessmentPayload {
                joint: state.config.joint.name.clone(),
                assessment,
            })
        }
        Err(e) => scoring_error_response(&e),
    }
}

/// Run an evaluation cycle over caller-supplied series.
pub async fn post_assess(
    State(state): State<Arc<DashboardState>>,
    axum::Json(request): axum::Json<AssessRequest>,
) -> Response {
    let mut config = state.config.clone();
    if let Some(fraction) = request.heavy_vehicle_fraction {
        config.traffic.heavy_vehicle_fraction = fraction;
    }

    let inputs = crate::types::JointInputs {
        traffic: request.traffic,
        noise: request.noise,
        temperature: request.temperature,
    };

    match scoring::assess(&inputs, &config) {
        Ok(assessment) => ApiResponse::ok(AssessmentPayload {
            joint: config.joint.name.clone(),
            assessment,
        }),
        Err(e) => scoring_error_response(&e),
    }
}

fn scoring_error_response(err: &ScoringError) -> Response {
    let code = match err {
        ScoringError::InsufficientData { .. } => "INSUFFICIENT_DATA",
        ScoringError::InvalidInput(_) => "INVALID_INPUT",
    };
    ApiErrorResponse::unprocessable(code, err.to_string())
}

fn acquisition_error_response(err: &AcquisitionError) -> Response {
    match err {
        AcquisitionError::Http(_) => ApiErrorResponse::bad_gateway(err.to_string()),
        AcquisitionError::Io { .. } | AcquisitionError::Parse { .. } => {
            ApiErrorResponse::internal(err.to_string())
        }
    }
}
