//! Neutral Minds Triage API - Main Entry Point

use anyhow::Context;
use tracing::info;
use triage_api::{init_logging, run_server, ApiConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::load().context("Failed to load API configuration")?;
    init_logging(config.json_logs);

    info!("=== Neutral Minds Triage API v{} ===", env!("CARGO_PKG_VERSION"));

    run_server(config).await
}
