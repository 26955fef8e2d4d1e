//! HTTP API server exposing the four audit domains.
//!
//! Routes:
//! - `POST /api/security/analyze`
//! - `POST /api/performance/analyze`
//! - `POST /api/seo/analyze`
//! - `POST /api/accessibility`
//!
//! All endpoints take `{"url": "..."}` and answer with the
//! `{"success": true, "data": ...}` envelope or `{"error": "..."}`.

mod handlers;
mod types;

use std::sync::Arc;

use axum::routing::post;
use axum::Router;

use crate::fetch::Fetcher;
use crate::signal::SignalSource;

use handlers::{accessibility_handler, performance_handler, security_handler, seo_handler};
pub use types::{AnalyzeRequest, AppState};

/// Builds the API router over the shared fetcher and signal source.
pub fn build_router(fetcher: Fetcher, signals: Arc<dyn SignalSource>) -> Router {
    let state = AppState { fetcher, signals };
    Router::new()
        .route("/api/security/analyze", post(security_handler))
        .route("/api/performance/analyze", post(performance_handler))
        .route("/api/seo/analyze", post(seo_handler))
        .route("/api/accessibility", post(accessibility_handler))
        .with_state(state)
}

/// Binds the listener and serves the audit API until shutdown.
pub async fn start_server(
    bind: &str,
    port: u16,
    fetcher: Fetcher,
    signals: Arc<dyn SignalSource>,
) -> Result<(), anyhow::Error> {
    let app = build_router(fetcher, signals);

    let listener = tokio::net::TcpListener::bind(format!("{bind}:{port}"))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind audit server to {bind}:{port}: {e}"))?;

    log::info!("Audit server listening on http://{bind}:{port}/");
    log::info!("  - Security: POST http://{bind}:{port}/api/security/analyze");
    log::info!("  - Performance: POST http://{bind}:{port}/api/performance/analyze");
    log::info!("  - SEO: POST http://{bind}:{port}/api/seo/analyze");
    log::info!("  - Accessibility: POST http://{bind}:{port}/api/accessibility");

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Audit server error: {e}"))?;

    Ok(())
}
