//! Route configuration.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use pubxml_convert::PublishedItemConverter;

use crate::handlers;
use crate::state::AppState;

/// Path of the conversion endpoint.
pub const CONVERT_PATH: &str = "/convert/json-to-xml";

/// Creates all API routes.
///
/// # Routes
///
/// - `POST /convert/json-to-xml` - Convert a document to PublishedItem XML
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness probe
/// - `GET /_readiness` - Readiness probe
pub fn create_routes<C>(state: AppState<C>) -> Router
where
    C: PublishedItemConverter + 'static,
{
    let body_limit = DefaultBodyLimit::max(state.max_body_size());

    Router::new()
        .route(CONVERT_PATH, post(handlers::convert_handler::<C>))
        .route("/health", get(handlers::health_handler::<C>))
        .route("/_liveness", get(handlers::health::liveness_handler))
        .route("/_readiness", get(handlers::health::readiness_handler::<C>))
        .layer(body_limit)
        .with_state(state)
}
