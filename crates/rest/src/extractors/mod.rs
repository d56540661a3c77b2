//! Axum extractors for the conversion API.
//!
//! - [`JsonDocument`] - Reads the request body as an input document

pub mod input_document;

pub use input_document::{JsonDocument, JsonDocumentRejection, is_json_content_type};
