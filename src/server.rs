//! HTTP server initialization and runtime setup.
//!
//! Loads the dataset, builds the immutable query context and runs the Axum
//! server until Ctrl+C.

use crate::config::Config;
use crate::infrastructure::dataset::Dataset;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Dataset (embedded or from `DATASET_PATH`)
/// - Record store, name normalizer and aggregates
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - The dataset cannot be read or fails integrity checks
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let dataset =
        Dataset::load(config.dataset_path.as_deref()).context("Failed to load dataset")?;
    let state = AppState::from_dataset(dataset).context("Dataset failed integrity checks")?;

    let app = app_router(state, config.rate_limit());

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
