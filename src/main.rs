//! Invoice engine server
//!
//! Usage: `invoice-engine [CONFIG_PATH]`. Without an argument the server reads
//! `config/app.yaml` if present and otherwise runs with defaults.

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use invoice_engine::api::{AppState, create_router};
use invoice_engine::config::ConfigLoader;

const DEFAULT_CONFIG_PATH: &str = "config/app.yaml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => ConfigLoader::load(path)?,
        None => ConfigLoader::load_or_default(DEFAULT_CONFIG_PATH)?,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging().filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let app = create_router(AppState::in_memory());

    let addr = config.server().bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!(address = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
