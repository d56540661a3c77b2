//! The conversion entry point.

use pubxml_contracts::InputDocument;
use pubxml_serde::xml::to_xml_string;
use tracing::debug;

use crate::error::ConvertResult;
use crate::mapping::map_document;
use crate::validation::validate;

/// Converts an input document to a `PublishedItem` XML document.
///
/// Implementations must be stateless between calls; the HTTP layer shares a
/// single instance across all requests.
pub trait PublishedItemConverter: Send + Sync {
    /// Short name used in logs and health responses.
    fn name(&self) -> &'static str;

    /// Validates, maps, and renders the document.
    fn convert(&self, input: &InputDocument) -> ConvertResult<String>;
}

/// The standard converter: validate, map, then render with the XML writer.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlConverter;

impl XmlConverter {
    /// Creates a new converter.
    pub fn new() -> Self {
        Self
    }
}

impl PublishedItemConverter for XmlConverter {
    fn name(&self) -> &'static str {
        "published-item-xml"
    }

    fn convert(&self, input: &InputDocument) -> ConvertResult<String> {
        validate(input)?;

        let item = map_document(input);
        let xml = to_xml_string(&item)?;

        debug!(bytes = xml.len(), "Rendered PublishedItem XML");
        Ok(xml)
    }
}
