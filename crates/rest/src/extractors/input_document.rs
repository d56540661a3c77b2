//! Input document extractor.
//!
//! Reads a JSON request body into an [`InputDocument`]. Property names are
//! matched case-insensitively, so `"FirstName"`, `"firstName"` and
//! `"firstname"` bind to the same field.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use mime::Mime;
use pubxml_contracts::InputDocument;
use pubxml_serde::from_json_slice_case_insensitive;
use tracing::debug;

use crate::error::RestError;

/// Axum extractor for input documents.
///
/// A request without a `Content-Type` header is read as JSON. Any other
/// non-JSON media type is rejected with 415.
///
/// # Example
///
/// ```rust,ignore
/// use pubxml_rest::extractors::JsonDocument;
///
/// async fn handler(JsonDocument(input): JsonDocument) {
///     println!("Title: {:?}", input.title);
/// }
/// ```
#[derive(Debug)]
pub struct JsonDocument(pub InputDocument);

/// Error type for input document extraction failures.
#[derive(Debug)]
pub enum JsonDocumentRejection {
    /// The body is not a JSON object matching the document shape.
    InvalidJson(String),
    /// The body could not be read.
    UnreadableBody(String),
    /// The body exceeded the configured size limit.
    PayloadTooLarge,
    /// Content type is not JSON.
    UnsupportedMediaType(String),
}

impl IntoResponse for JsonDocumentRejection {
    fn into_response(self) -> Response {
        RestError::from(self).into_response()
    }
}

impl From<JsonDocumentRejection> for RestError {
    fn from(rejection: JsonDocumentRejection) -> Self {
        match rejection {
            JsonDocumentRejection::InvalidJson(message) => RestError::BadRequest { message },
            JsonDocumentRejection::UnreadableBody(message) => RestError::BadRequest { message },
            JsonDocumentRejection::PayloadTooLarge => RestError::PayloadTooLarge,
            JsonDocumentRejection::UnsupportedMediaType(content_type) => {
                RestError::UnsupportedMediaType { content_type }
            }
        }
    }
}

/// Returns true for `application/json`, `text/json` and `+json` types.
pub fn is_json_content_type(content_type: &str) -> bool {
    let Ok(mime) = content_type.parse::<Mime>() else {
        return false;
    };

    let json_type = mime.type_() == mime::APPLICATION || mime.type_() == mime::TEXT;
    let json_subtype = mime.subtype() == mime::JSON || mime.suffix() == Some(mime::JSON);
    json_type && json_subtype
}

impl<S> FromRequest<S> for JsonDocument
where
    S: Send + Sync,
{
    type Rejection = JsonDocumentRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Must own the string before moving req
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/json")
            .to_string();

        if !is_json_content_type(&content_type) {
            return Err(JsonDocumentRejection::UnsupportedMediaType(content_type));
        }

        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                JsonDocumentRejection::PayloadTooLarge
            } else {
                JsonDocumentRejection::UnreadableBody(e.body_text())
            }
        })?;

        let document: InputDocument = from_json_slice_case_insensitive(&bytes).map_err(|e| {
            debug!(error = %e, "Rejected malformed request body");
            JsonDocumentRejection::InvalidJson(e.to_string())
        })?;

        Ok(JsonDocument(document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http;

    fn request(content_type: Option<&str>, body: &'static str) -> Request {
        let mut builder = http::Request::builder().method("POST").uri("/");
        if let Some(ct) = content_type {
            builder = builder.header(header::CONTENT_TYPE, ct);
        }
        builder.body(Body::from(body)).unwrap()
    }

    #[test]
    fn test_json_content_types() {
        assert!(is_json_content_type("application/json"));
        assert!(is_json_content_type("application/json; charset=utf-8"));
        assert!(is_json_content_type("text/json"));
        assert!(is_json_content_type("application/problem+json"));
        assert!(!is_json_content_type("application/xml"));
        assert!(!is_json_content_type("text/plain"));
        assert!(!is_json_content_type("not a mime"));
    }

    #[tokio::test]
    async fn test_extracts_case_insensitive_document() {
        let req = request(
            Some("application/json"),
            r#"{"Title": "Upper", "STATUS": 3, "testRun": true}"#,
        );
        let JsonDocument(doc) = JsonDocument::from_request(req, &()).await.unwrap();
        assert_eq!(doc.title.as_deref(), Some("Upper"));
        assert_eq!(doc.status, Some(3));
        assert_eq!(doc.test_run, Some(true));
    }

    #[tokio::test]
    async fn test_missing_content_type_is_json() {
        let req = request(None, r#"{"title": "x"}"#);
        assert!(JsonDocument::from_request(req, &()).await.is_ok());
    }

    #[tokio::test]
    async fn test_rejects_non_json_content_type() {
        let req = request(Some("application/xml"), "<x/>");
        let err = JsonDocument::from_request(req, &()).await.unwrap_err();
        assert!(matches!(err, JsonDocumentRejection::UnsupportedMediaType(ct) if ct == "application/xml"));
    }

    #[tokio::test]
    async fn test_rejects_malformed_json() {
        let req = request(Some("application/json"), "{\"title\": ");
        let err = JsonDocument::from_request(req, &()).await.unwrap_err();
        assert!(matches!(err, JsonDocumentRejection::InvalidJson(_)));
    }

    #[tokio::test]
    async fn test_rejects_wrongly_typed_fields() {
        let req = request(Some("application/json"), r#"{"status": "three"}"#);
        let err = JsonDocument::from_request(req, &()).await.unwrap_err();
        assert!(matches!(err, JsonDocumentRejection::InvalidJson(_)));
    }
}
