// src/server/mod.rs
//! Recipe HTTP server
//!
//! Thin transport over [`crate::store::RecipeStore`]:
//! - `POST /recipes` creates, `GET /recipes` lists
//! - `GET|PATCH|DELETE /recipes/:id` fetch, merge-update and remove
//! - `GET /health` for liveness checks
//!
//! Store calls run on the blocking pool; the store does its own locking.

pub mod config;
mod error;
mod handlers;
mod routes;

pub use config::AppConfig;
pub use error::{ApiError, ApiResult, ErrorBody};
pub use routes::create_router;

use crate::store::{RecipeStore, StoreBackend};
use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,
    /// Where recipes live
    pub backend: StoreBackend,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            backend: StoreBackend::Memory,
        }
    }
}

/// Shared server state
pub struct AppState {
    pub store: Arc<dyn RecipeStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecipeStore>) -> Self {
        Self { store }
    }
}

/// Shared state handle passed to handlers
pub type SharedState = Arc<AppState>;

/// Start the recipe server and run until Ctrl-C
pub async fn run_server(config: ServerConfig) -> Result<()> {
    tracing::info!("Starting recipe server on {}", config.bind_addr);

    let store = config
        .backend
        .open()
        .context("Failed to open recipe store")?;
    let state = Arc::new(AppState::new(store));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    tracing::info!("Recipe server is ready to serve");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Recipe server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
