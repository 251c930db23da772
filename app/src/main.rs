//! Gantry server entrypoint

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use gantry_api::AppState;
use gantry_core::{AppConfig, BridgeConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let app_config = AppConfig::from_env();
    let bridge_config = BridgeConfig::mainnet();

    tracing::info!(
        port = app_config.api_port,
        hide_pool = app_config.hide_pool_route,
        chains = bridge_config.supported_chains().count(),
        tokens = bridge_config.tokens().count(),
        "Starting Gantry"
    );

    let port = app_config.api_port;
    let state = AppState::new(app_config, bridge_config);

    gantry_api::start_server(state, port)
        .await
        .context("API server failed")
}
