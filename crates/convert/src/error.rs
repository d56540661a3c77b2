//! Error types for the conversion pipeline.

use pubxml_serde::SerdeError;
use thiserror::Error;

use crate::validation::ValidationErrors;

/// Errors returned by a [`PublishedItemConverter`](crate::PublishedItemConverter).
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The document failed one or more publication checks. Mapping did not run.
    #[error("document rejected: {0}")]
    Validation(#[from] ValidationErrors),

    /// The mapped document could not be rendered.
    #[error("failed to render PublishedItem XML: {0}")]
    Serialization(#[from] SerdeError),
}

impl ConvertError {
    /// Returns the validation failures when this is a rejection.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            ConvertError::Validation(errors) => Some(errors),
            ConvertError::Serialization(_) => None,
        }
    }
}

/// Result type alias for conversions.
pub type ConvertResult<T> = Result<T, ConvertError>;
