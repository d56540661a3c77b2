//! Health check endpoint handlers.
//!
//! Provides health, liveness, and readiness endpoints for monitoring and
//! load balancers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pubxml_convert::PublishedItemConverter;
use tracing::debug;

use crate::error::RestResult;
use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// # HTTP Request
///
/// `GET [base]/health`
pub async fn health_handler<C>(State(state): State<AppState<C>>) -> RestResult<Response>
where
    C: PublishedItemConverter,
{
    debug!("Processing health check request");

    let health_response = serde_json::json!({
        "status": "healthy",
        "converter": state.converter().name(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    });

    Ok((StatusCode::OK, Json(health_response)).into_response())
}

/// Handler for the liveness probe.
///
/// # HTTP Request
///
/// `GET [base]/_liveness`
pub async fn liveness_handler() -> impl IntoResponse {
    StatusCode::OK
}

/// Handler for the readiness probe.
///
/// The converter holds no external resources, so readiness only reports
/// which converter is loaded.
///
/// # HTTP Request
///
/// `GET [base]/_readiness`
pub async fn readiness_handler<C>(State(state): State<AppState<C>>) -> RestResult<Response>
where
    C: PublishedItemConverter,
{
    debug!("Processing readiness check request");

    let response = serde_json::json!({
        "status": "ready",
        "converter": state.converter().name(),
        "checks": {
            "converter": "ok"
        }
    });

    Ok((StatusCode::OK, Json(response)).into_response())
}
