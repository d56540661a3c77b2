//! Response header generation for converted documents.

use axum::http::{HeaderMap, HeaderValue, header};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Content type of converted documents.
pub const XML_CONTENT_TYPE: &str = "application/xml";

/// Timestamp layout used in download file names.
pub const FILE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Builds a download file name of the form `{uuid}_{yyyyMMdd_HHmmss}.xml`.
///
/// The identifier is a random v4 UUID in hyphenated lowercase form; the
/// timestamp is the given instant in UTC.
pub fn download_file_name(at: DateTime<Utc>) -> String {
    format!(
        "{}_{}.xml",
        Uuid::new_v4(),
        at.format(FILE_TIMESTAMP_FORMAT)
    )
}

/// Builder for attachment response headers.
#[derive(Debug)]
pub struct DownloadHeaders {
    file_name: String,
    content_type: String,
}

impl DownloadHeaders {
    /// Headers for an XML attachment with the given file name.
    pub fn xml(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: XML_CONTENT_TYPE.to_string(),
        }
    }

    /// Returns the attachment file name.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the `Content-Disposition` value.
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.file_name)
    }

    /// Converts to an Axum HeaderMap.
    pub fn to_header_map(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        if let Ok(value) = HeaderValue::from_str(&self.content_type) {
            headers.insert(header::CONTENT_TYPE, value);
        }

        if let Ok(value) = HeaderValue::from_str(&self.content_disposition()) {
            headers.insert(header::CONTENT_DISPOSITION, value);
        }

        headers
    }
}
