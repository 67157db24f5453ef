//! Application builder: wires state and router into an Axum app and runs it.

use axum::Router;
use tracing::info;

use househub_auth::password::upgrade_plaintext_passwords;
use househub_core::config::AppConfig;
use househub_core::error::{AppError, ErrorKind};
use househub_storage::DataStore;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Runs the HouseHub server until `shutdown` resolves.
pub async fn run_server(
    config: AppConfig,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), AppError> {
    info!("Starting HouseHub server...");

    // ── Step 1: Open datasets ────────────────────────────────────
    let store = DataStore::open(&config.storage).await?;

    // ── Step 2: Upgrade legacy plaintext passwords ───────────────
    let state = AppState::new(config, store)?;
    let upgraded =
        upgrade_plaintext_passwords(&state.store.users, &state.password_hasher).await?;
    if upgraded > 0 {
        info!(count = upgraded, "Legacy passwords upgraded");
    }

    // ── Step 3: Bind and serve ───────────────────────────────────
    let addr = format!("{}:{}", state.config.server.host, state.config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e)
    })?;

    info!("HouseHub server listening on {}", addr);

    axum::serve(listener, build_app(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Server error", e))?;

    info!("HouseHub server shut down gracefully");
    Ok(())
}
