//! # pubxml-rest - HTTP API for PublishedItem conversion
//!
//! This crate exposes the document converter over HTTP. A client posts a
//! JSON input document and receives the rendered `PublishedItem` XML as a
//! file attachment, or a problem details body listing every reason the
//! document was rejected.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pubxml_convert::XmlConverter;
//! use pubxml_rest::{create_app_with_config, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::default();
//!     let app = create_app_with_config(XmlConverter::new(), config);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Interaction | HTTP Method | URL Pattern |
//! |------------|-------------|-------------|
//! | convert | POST | `/convert/json-to-xml` |
//! | health | GET | `/health` |
//! | liveness | GET | `/_liveness` |
//! | readiness | GET | `/_readiness` |
//!
//! ## Error Handling
//!
//! Rejections are returned as `application/problem+json`:
//!
//! | HTTP Status | Cause |
//! |-------------|-------|
//! | 400 | Validation failures, or a body that is not a JSON document |
//! | 408 | Request exceeded the configured timeout |
//! | 413 | Body exceeded the configured size limit |
//! | 415 | Content type is not JSON |
//! | 500 | The mapped document could not be rendered |
//!
//! ## Architecture
//!
//! - [`error`] - Error types and problem details mapping
//! - [`config`] - Server configuration
//! - [`state`] - Application state (converter, configuration)
//! - [`handlers`] - HTTP request handlers
//! - [`extractors`] - Request body extraction
//! - [`responses`] - Problem details and attachment headers
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod responses;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use pubxml_convert::PublishedItemConverter;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// For more control, use [`create_app_with_config`].
///
/// # Example
///
/// ```rust,ignore
/// use pubxml_convert::XmlConverter;
/// use pubxml_rest::create_app;
///
/// let app = create_app(XmlConverter::new());
/// ```
pub fn create_app<C>(converter: C) -> Router
where
    C: PublishedItemConverter + 'static,
{
    create_app_with_config(converter, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// Sets up the routes, request tracing, the request timeout and, when
/// enabled, CORS.
///
/// # Example
///
/// ```rust,ignore
/// use pubxml_convert::XmlConverter;
/// use pubxml_rest::{create_app_with_config, ServerConfig};
///
/// let config = ServerConfig {
///     port: 3000,
///     enable_cors: false,
///     ..Default::default()
/// };
/// let app = create_app_with_config(XmlConverter::new(), config);
/// ```
pub fn create_app_with_config<C>(converter: C, config: ServerConfig) -> Router
where
    C: PublishedItemConverter + 'static,
{
    info!("Creating REST API server with converter: {}", converter.name());

    let state = AppState::new(Arc::new(converter), config.clone());

    let router = routing::create_routes(state);

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    let router = if config.enable_cors {
        router.layer(build_cors_layer(&config))
    } else {
        router
    };

    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Default log filter for the given level.
///
/// Used when `RUST_LOG` is not set.
pub fn default_log_filter(level: &str) -> String {
    format!(
        "pubxml_rest={level},pubxml_convert={level},pubxml={level},tower_http=debug",
        level = level
    )
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup. `RUST_LOG` takes
/// precedence over `level`.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_filter(level)));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
