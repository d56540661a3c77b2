//! Error types for the conversion API.
//!
//! Every error is returned as an `application/problem+json` body built by
//! [`ProblemDetails`].
//!
//! | Error | HTTP Status | Title |
//! |-------|-------------|-------|
//! | Validation | 400 | One or more validation errors occurred. |
//! | BadRequest | 400 | Invalid request body |
//! | PayloadTooLarge | 413 | Payload Too Large |
//! | UnsupportedMediaType | 415 | Unsupported Media Type |
//! | InternalError | 500 | Internal Server Error |

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pubxml_convert::{ConvertError, ValidationErrors};
use thiserror::Error;
use tracing::error;

use crate::responses::ProblemDetails;

/// The primary error type for REST API operations.
#[derive(Debug, Error)]
pub enum RestError {
    /// The document failed publication checks (HTTP 400).
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// The body is not a usable JSON document (HTTP 400).
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message.
        message: String,
    },

    /// The body exceeded the configured limit (HTTP 413).
    #[error("Payload too large")]
    PayloadTooLarge,

    /// Unsupported media type (HTTP 415).
    #[error("Unsupported media type: {content_type}")]
    UnsupportedMediaType {
        /// The unsupported content type.
        content_type: String,
    },

    /// Internal server error (HTTP 500).
    #[error("Internal error: {message}")]
    InternalError {
        /// Error message.
        message: String,
    },
}

impl RestError {
    /// Returns the HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::Validation(_) | RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            RestError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Builds the problem details body for this error.
    pub fn to_problem(&self) -> ProblemDetails {
        let status = self.status_code();
        match self {
            RestError::Validation(errors) => ProblemDetails::validation(errors),
            RestError::BadRequest { message } => ProblemDetails::builder(status)
                .title("Invalid request body")
                .detail(message.clone())
                .build(),
            RestError::PayloadTooLarge => ProblemDetails::builder(status)
                .detail("Request body exceeds the configured size limit")
                .build(),
            RestError::UnsupportedMediaType { content_type } => ProblemDetails::builder(status)
                .detail(format!("Content type '{}' is not supported", content_type))
                .build(),
            // Internal details stay in the log
            RestError::InternalError { .. } => ProblemDetails::builder(status).build(),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        if let RestError::InternalError { message } = &self {
            error!(error = %message, "Conversion failed");
        }
        self.to_problem().into_response()
    }
}

impl From<ConvertError> for RestError {
    fn from(err: ConvertError) -> Self {
        match err {
            ConvertError::Validation(errors) => RestError::Validation(errors),
            ConvertError::Serialization(e) => RestError::InternalError {
                message: e.to_string(),
            },
        }
    }
}

impl From<ValidationErrors> for RestError {
    fn from(errors: ValidationErrors) -> Self {
        RestError::Validation(errors)
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;
