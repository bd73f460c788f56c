//! Roertwin: tunnel asphalt joint digital twin.
//!
//! Estimates the structural health of a tunnel asphalt joint from three
//! independent signals (traffic loading, thermal cycling, and noise-based
//! anomaly detection) and combines them into one bounded health index with
//! a maintenance recommendation.
//!
//! ## Architecture
//!
//! - **Acquisition**: adapters producing the three input series (mock
//!   generators, traffic CSV, Open-Meteo forecast)
//! - **Scoring**: three independent stress calculators plus the health
//!   aggregator (the deterministic core)
//! - **Presentation**: plain-text report rendering and the dashboard REST API

pub mod acquisition;
pub mod api;
pub mod config;
pub mod report;
pub mod scoring;
pub mod types;

// Re-export configuration
pub use config::JointConfig;

// Re-export commonly used types
pub use types::{
    HealthIndex, HealthStatus, JointAssessment, JointInputs, NoiseAnomaly, NoiseSample,
    NoiseTrend, TemperatureSample, ThermalStress, TrafficFatigue, TrafficSample,
};

// Re-export the evaluation chain and its errors
pub use scoring::{assess, ScoringError};

// Re-export acquisition surface
pub use acquisition::{AcquisitionError, FieldProvider, InputProvider};
