//! Dashboard REST API using Axum.
//!
//! Three endpoints: a liveness probe, a provider-driven assessment, and an
//! assessment over caller-supplied series. CORS is permissive so a locally
//! served dashboard can call the API during development.

pub mod envelope;
pub mod handlers;

pub use handlers::DashboardState;

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the application router.
pub fn create_app(state: Arc<DashboardState>) -> Router {
    Router::new()
        .route("/healthz", get(handlers::healthz))
        .route("/api/v1/assessment", get(handlers::get_assessment))
        .route("/api/v1/assess", post(handlers::post_assess))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
