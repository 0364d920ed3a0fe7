use std::net::SocketAddr;

use anyhow::Context;
use dotenvy::dotenv;
use tracing::{error, info};

mod aspect;
mod config;
mod handlers;
mod imaging;
mod llm;
mod pipeline;
mod platform;
mod state;
mod utils;

use config::Config;
use state::AppState;
use utils::logging::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Logging comes up before config so a missing credential is logged, not
    // just printed to a dead terminal.
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let _guards = init_logging(&log_level);

    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            error!("Configuration error, refusing to start: {err}");
            return Err(err);
        }
    };

    let http = utils::http::build_http_client(config.request_timeout_seconds)
        .context("failed to build HTTP client")?;
    let state = AppState::new(config, http);

    let addr: SocketAddr = format!("{}:{}", state.config.host, state.config.port)
        .parse()
        .context("invalid HOST/PORT")?;
    let app = handlers::router(state);

    info!("Starting ad generator API server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {err}");
        return;
    }
    info!("Shutdown signal received, stopping server");
}
