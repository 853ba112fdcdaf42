//! Local HTTP prediction service.
//!
//! The bundle is loaded once at startup and shared read-only between
//! requests. CORS is open because the caller is a browser extension.

mod error;
mod routes;

pub use routes::create_router;

use anyhow::{Context, Result};
use phishguard_core::ModelBundle;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Shared request state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub bundle: Arc<ModelBundle>,
    /// Used when a request does not carry its own threshold.
    pub threshold: f64,
}

impl AppState {
    pub fn new(bundle: ModelBundle, threshold: f64) -> Self {
        Self {
            bundle: Arc::new(bundle),
            threshold,
        }
    }
}

/// Serves until Ctrl-C.
pub async fn run(state: AppState, bind: &str) -> Result<()> {
    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("bind {bind}"))?;
    let addr = listener.local_addr()?;

    tracing::info!("prediction service listening on {addr}");
    println!("Server available at: http://{addr}");
    println!("Endpoints:");
    println!("  GET  /health");
    println!("  POST /predict  (JSON: {{\"url\": \"http://example.com\"}})");
    println!("  GET  /predict?url=http://example.com");
    println!("Press Ctrl+C to stop the server");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("http server")?;

    tracing::info!("prediction service stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("received Ctrl-C, shutting down"),
        Err(e) => {
            // without a signal handler, run until killed
            tracing::warn!("cannot listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    }
}
