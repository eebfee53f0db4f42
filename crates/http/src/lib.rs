//! HTTP API server for the dashboard.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;

use std::path::PathBuf;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Json, Router};
use dashboard_service::Dashboard;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

pub use response_types::VersionResponse;

/// Shared application state for all HTTP handlers.
pub struct AppState {
    pub dashboard: Arc<Dashboard>,
    /// Directory served under `/data` when documents come from disk.
    pub data_dir: Option<PathBuf>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let data_dir = state.data_dir.clone();
    let router = Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/api/page-sizes", get(handlers::collections::page_sizes))
        .route("/api/events/range", get(handlers::events::events_in_range))
        .route("/api/{collection}", get(handlers::collections::get_page))
        .route("/api/{collection}/reload", post(handlers::collections::reload))
        .with_state(state);

    let router = match data_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "serving static documents under /data");
            router.nest_service("/data", ServeDir::new(dir))
        },
        None => router,
    };
    router.layer(CorsLayer::permissive())
}

/// Binds `addr` and serves the router until the process exits.
pub async fn serve(addr: &str, state: Arc<AppState>) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Starting HTTP server on {}", listener.local_addr()?);
    axum::serve(listener, create_router(state)).await?;
    Ok(())
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
