//! HTTP handlers for the status and health views.
//!
//! Both views drive the monitor's refresh-or-serve operation first; a
//! monitor error is a first-class response, never a panic.

use crate::core::domain::model::health::HealthVerdict;
use crate::core::infrastructure::monitor::StatusMonitor;
use crate::serve::response::HealthBody;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

const HEALTH_CONTENT_TYPE: &str = "application/health+json";

/// `GET /v1/status`: the full appliance status as JSON.
pub async fn status(State(monitor): State<Arc<StatusMonitor>>) -> Response {
    let status = match monitor.current().await {
        Ok(status) => status,
        Err(err) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("could not get appliance status: {}", err),
            )
                .into_response();
        }
    };

    match serde_json::to_string(&status) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("could not serialize appliance status: {}", err),
        )
            .into_response(),
    }
}

/// `GET /v1/health`: the 3-state verdict derived from the appliance
/// status code.
pub async fn health(State(monitor): State<Arc<StatusMonitor>>) -> Response {
    match monitor.current().await {
        Err(_) => health_response(StatusCode::INTERNAL_SERVER_ERROR, &HealthBody::fail()),
        Ok(status) => match HealthVerdict::from_status_code(status.status) {
            verdict @ (HealthVerdict::Pass | HealthVerdict::Warn) => {
                health_response(StatusCode::OK, &HealthBody::verdict(verdict))
            }
            HealthVerdict::Fail => {
                health_response(StatusCode::INTERNAL_SERVER_ERROR, &HealthBody::fail())
            }
        },
    }
}

fn health_response(code: StatusCode, body: &HealthBody) -> Response {
    let json =
        serde_json::to_string(body).unwrap_or_else(|_| r#"{"status":"fail"}"#.to_string());
    (code, [(header::CONTENT_TYPE, HEALTH_CONTENT_TYPE)], json).into_response()
}
