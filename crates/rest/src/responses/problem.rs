//! Problem details response generation.
//!
//! Rejections are reported as `application/problem+json` bodies
//! ([RFC 9457](https://www.rfc-editor.org/rfc/rfc9457)). Validation
//! rejections carry an `errors` object keyed by input property name.

use std::collections::BTreeMap;

use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use pubxml_convert::ValidationErrors;
use serde::Serialize;

/// Media type of problem details bodies.
pub const PROBLEM_JSON: &str = "application/problem+json";

/// Title used for validation rejections.
pub const VALIDATION_TITLE: &str = "One or more validation errors occurred.";

/// A problem details body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemDetails {
    /// URI identifying the problem type.
    #[serde(rename = "type")]
    pub type_uri: String,
    /// Short summary of the problem type.
    pub title: String,
    /// HTTP status code.
    pub status: u16,
    /// Explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Failure messages grouped by property name.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ProblemDetails {
    /// Starts a problem for the given status.
    pub fn builder(status: StatusCode) -> ProblemDetailsBuilder {
        ProblemDetailsBuilder::new(status)
    }

    /// Builds the validation problem for a rejected document.
    pub fn validation(errors: &ValidationErrors) -> Self {
        errors
            .failures()
            .iter()
            .fold(
                Self::builder(StatusCode::BAD_REQUEST).title(VALIDATION_TITLE),
                |builder, failure| builder.error(failure.property, failure.message),
            )
            .build()
    }

    /// Returns the status as a [`StatusCode`].
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match serde_json::to_vec(&self) {
            Ok(body) => body,
            Err(_) => return status.into_response(),
        };

        let mut response = (status, body).into_response();
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static(PROBLEM_JSON));
        response
    }
}

/// Builder for [`ProblemDetails`].
#[derive(Debug, Clone)]
pub struct ProblemDetailsBuilder {
    status: StatusCode,
    title: Option<String>,
    detail: Option<String>,
    errors: BTreeMap<String, Vec<String>>,
}

impl ProblemDetailsBuilder {
    /// Creates a new builder.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            title: None,
            detail: None,
            errors: BTreeMap::new(),
        }
    }

    /// Sets the title. Defaults to the status reason phrase.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the detail.
    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Appends a message under a property name.
    pub fn error(mut self, property: impl Into<String>, message: impl Into<String>) -> Self {
        self.errors
            .entry(property.into())
            .or_default()
            .push(message.into());
        self
    }

    /// Builds the problem.
    pub fn build(self) -> ProblemDetails {
        ProblemDetails {
            type_uri: type_uri(self.status).to_string(),
            title: self.title.unwrap_or_else(|| {
                self.status
                    .canonical_reason()
                    .unwrap_or("Error")
                    .to_string()
            }),
            status: self.status.as_u16(),
            detail: self.detail,
            errors: self.errors,
        }
    }
}

/// RFC 9110 section describing the status.
fn type_uri(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "https://tools.ietf.org/html/rfc9110#section-15.5.1",
        StatusCode::REQUEST_TIMEOUT => "https://tools.ietf.org/html/rfc9110#section-15.5.9",
        StatusCode::PAYLOAD_TOO_LARGE => "https://tools.ietf.org/html/rfc9110#section-15.5.14",
        StatusCode::UNSUPPORTED_MEDIA_TYPE => {
            "https://tools.ietf.org/html/rfc9110#section-15.5.16"
        }
        _ => "https://tools.ietf.org/html/rfc9110#section-15.6.1",
    }
}
