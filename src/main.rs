//! Roertwin: tunnel asphalt joint digital twin.
//!
//! # Usage
//!
//! ```bash
//! # One-shot health report from synthetic data
//! cargo run --release
//!
//! # Exercise a degradation scenario
//! cargo run --release -- --scenario cold-snap --seed 7
//!
//! # Assess real traffic counts with a live weather forecast
//! cargo run --release -- --traffic-csv data/traffic.csv --live-weather
//!
//! # Serve the dashboard API
//! cargo run --release -- --serve --addr 0.0.0.0:8080
//! ```
//!
//! # Environment Variables
//!
//! - `ROERTWIN_CONFIG`: Path to a joint_config.toml overriding the defaults
//! - `RUST_LOG`: Logging level (default: info)

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use roertwin::acquisition::mock::{MockProvider, MockScenario};
use roertwin::acquisition::open_meteo::OpenMeteoClient;
use roertwin::acquisition::{FieldProvider, InputProvider};
use roertwin::api::{create_app, DashboardState};
use roertwin::config::JointConfig;
use roertwin::{report, scoring};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "roertwin")]
#[command(about = "Tunnel asphalt joint digital twin - preventive maintenance decision support")]
#[command(version)]
struct CliArgs {
    /// Serve the dashboard API instead of printing a one-shot report
    #[arg(long)]
    serve: bool,

    /// Override the server bind address (default from config: "0.0.0.0:8080")
    #[arg(short, long)]
    addr: Option<String>,

    /// Print the assessment as JSON instead of the plain-text report
    #[arg(long)]
    json: bool,

    /// Path to a joint configuration TOML file
    #[arg(long, env = "ROERTWIN_CONFIG")]
    config: Option<PathBuf>,

    /// Synthetic scenario: nominal, heavy-traffic, cold-snap, noisy-joint
    #[arg(long, default_value = "nominal")]
    scenario: MockScenario,

    /// Seed for the synthetic generators (fixed seed = reproducible run)
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Path to a traffic counts CSV (timestamp,total_vehicles[,heavy_vehicles])
    #[arg(long, value_name = "PATH")]
    traffic_csv: Option<PathBuf>,

    /// Fetch the 72 h temperature forecast from Open-Meteo instead of
    /// generating a synthetic one
    #[arg(long)]
    live_weather: bool,

    /// Heavy-vehicle fraction override in [0, 1] (the scenario slider)
    #[arg(long, value_name = "FRACTION")]
    heavy_fraction: Option<f64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = CliArgs::parse();

    let mut config = match &args.config {
        Some(path) => JointConfig::load_from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => JointConfig::load(),
    };
    if let Some(fraction) = args.heavy_fraction {
        config.traffic.heavy_vehicle_fraction = fraction;
    }
    config.validate().context("validating configuration")?;

    let provider = build_provider(&args, &config)?;
    info!(
        provider = provider.provider_name(),
        joint = %config.joint.name,
        "Starting evaluation"
    );

    if args.serve {
        let addr = args.addr.unwrap_or_else(|| config.server.addr.clone());
        serve(addr, provider, config).await
    } else {
        run_once(&args, provider, &config).await
    }
}

/// Pick the input provider from the CLI flags.
fn build_provider(args: &CliArgs, config: &JointConfig) -> Result<Arc<dyn InputProvider>> {
    let fraction = config.traffic.heavy_vehicle_fraction;

    if args.traffic_csv.is_some() || args.live_weather {
        let weather = if args.live_weather {
            Some(OpenMeteoClient::new(&config.weather).context("building Open-Meteo client")?)
        } else {
            None
        };
        Ok(Arc::new(FieldProvider::new(
            args.traffic_csv.clone(),
            weather,
            fraction,
            args.seed,
        )))
    } else {
        Ok(Arc::new(MockProvider::new(args.scenario, args.seed, fraction)))
    }
}

/// One evaluation cycle printed to stdout.
async fn run_once(
    args: &CliArgs,
    provider: Arc<dyn InputProvider>,
    config: &JointConfig,
) -> Result<()> {
    let inputs = provider.fetch().await.context("acquiring input series")?;
    let assessment = scoring::assess(&inputs, config).context("running the scoring model")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        print!(
            "{}",
            report::render(&config.joint.name, &assessment, chrono::Utc::now())
        );
    }
    Ok(())
}

/// Serve the dashboard API until interrupted.
async fn serve(addr: String, provider: Arc<dyn InputProvider>, config: JointConfig) -> Result<()> {
    let state = Arc::new(DashboardState { provider, config });
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(addr = %addr, "Dashboard API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await
        .context("serving dashboard API")?;
    Ok(())
}
