//! JSON to XML conversion handler.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use pubxml_convert::PublishedItemConverter;
use tracing::{debug, info};

use crate::error::RestResult;
use crate::extractors::JsonDocument;
use crate::responses::{DownloadHeaders, download_file_name};
use crate::state::AppState;

/// Handler for the conversion interaction.
///
/// Validates the document, maps it, and returns the rendered XML as a file
/// attachment.
///
/// # HTTP Request
///
/// `POST [base]/convert/json-to-xml`
///
/// # Response
///
/// - `200 OK` - `application/xml` attachment named `{uuid}_{yyyyMMdd_HHmmss}.xml`
/// - `400 Bad Request` - Validation failures or malformed JSON (problem details)
/// - `415 Unsupported Media Type` - Body is not JSON
pub async fn convert_handler<C>(
    State(state): State<AppState<C>>,
    JsonDocument(input): JsonDocument,
) -> RestResult<Response>
where
    C: PublishedItemConverter + 'static,
{
    debug!(
        id = input.id.as_deref().unwrap_or_default(),
        converter = state.converter().name(),
        "Processing conversion request"
    );

    let xml = state.converter().convert(&input)?;

    let headers = DownloadHeaders::xml(download_file_name(Utc::now()));
    info!(file = headers.file_name(), "Converted document");

    Ok((StatusCode::OK, headers.to_header_map(), xml).into_response())
}
