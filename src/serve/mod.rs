//! The HTTP API surface over the status monitor.

pub mod handlers;
pub mod response;

use crate::core::infrastructure::monitor::StatusMonitor;
use axum::Router;
use axum::routing::get;
use std::sync::Arc;

/// Builds the API router over an injected monitor.
pub fn router(monitor: Arc<StatusMonitor>) -> Router {
    Router::new()
        .route("/v1/status", get(handlers::status))
        .route("/v1/health", get(handlers::health))
        .with_state(monitor)
}
