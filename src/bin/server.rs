//! billcast server - electricity bill prediction form
//!
//! Loads the trained model and categorical encoders once, then serves the
//! prediction form over HTTP.
//!
//! # Usage
//! ```sh
//! MODEL_PATH=electricity_model.json ENCODERS_PATH=encoders.json cargo run --bin server
//! ```
//!
//! # Environment Variables
//! - `BIND_ADDRESS` - Listen address (default: 127.0.0.1)
//! - `PORT` - Listen port (default: 5000)
//! - `MODEL_PATH` - Serialized model (default: electricity_model.json)
//! - `ENCODERS_PATH` - Serialized encoders (default: encoders.json)

use anyhow::{Context, Result};
use billcast::application::prediction_service::PredictionService;
use billcast::config::Config;
use billcast::infrastructure::ArtifactStore;
use billcast::interfaces::{AppState, start_server};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the serialized model (overrides MODEL_PATH)
    #[arg(long)]
    model: Option<PathBuf>,

    /// Path to the serialized encoders (overrides ENCODERS_PATH)
    #[arg(long)]
    encoders: Option<PathBuf>,

    /// Listen port (overrides PORT)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("billcast server {} starting...", env!("CARGO_PKG_VERSION"));

    let mut config = Config::from_env()?;
    if let Some(model) = args.model {
        config.artifacts.model_path = model;
    }
    if let Some(encoders) = args.encoders {
        config.artifacts.encoders_path = encoders;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    info!(
        "Configuration loaded: Model={:?}, Encoders={:?}",
        config.artifacts.model_path, config.artifacts.encoders_path
    );

    let artifacts = ArtifactStore::new(
        config.artifacts.model_path.clone(),
        config.artifacts.encoders_path.clone(),
    )
    .load()
    .context("Failed to load model artifacts")?;

    let service = PredictionService::new(Arc::new(artifacts.predictor), artifacts.encoders);
    info!("Model ready: {}", service.model_name());

    let state = Arc::new(AppState { service });
    start_server(state, config.server.socket_addr()?).await?;

    Ok(())
}
