//! HTTP server lifecycle
//!
//! Builds the application state once, binds the listener and serves until a
//! shutdown signal arrives.

use tokio::net::TcpListener;
use tracing::{error, info};

use crate::api::{build_router, AppState};
use crate::config::Settings;
use crate::storage::{load_sample_events, StorageService};
use crate::utils::errors::{GamesConnectError, Result};

/// Create the store, seeded when configured, and wrap it in handler state
pub async fn build_state(settings: Settings) -> AppState {
    let storage = StorageService::new();
    if settings.seed.sample_events {
        load_sample_events(&storage).await;
    }
    AppState::new(storage, settings)
}

/// Serve the API until SIGINT/SIGTERM
pub async fn run(settings: Settings) -> Result<()> {
    let addr = settings.server.socket_addr().ok_or_else(|| {
        GamesConnectError::Config(format!(
            "Server address {}:{} cannot be resolved",
            settings.server.host, settings.server.port
        ))
    })?;

    if settings.features.event_creation_api {
        info!("Event creation endpoint enabled");
    }

    let app = build_router(build_state(settings).await);
    let listener = TcpListener::bind(addr).await?;
    info!(address = %listener.local_addr()?, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server has been shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
