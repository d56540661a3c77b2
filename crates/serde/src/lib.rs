//! # pubxml-serde
//!
//! Serialization layer for the publication XML converter.
//!
//! ## Features
//!
//! - **JSON input**: case-insensitive readers that lowercase every object key
//!   (in document order) before deserializing so that
//!   `"FirstName"`, `"firstName"` and `"firstname"` all bind to the same field.
//! - **XML output** (`xml` feature, on by default): a quick-xml event writer that
//!   renders a `PublishedItem` with a fixed element order, two-space indentation,
//!   an XML declaration and no namespaces.
//!
//! ## Examples
//!
//! ```ignore
//! use pubxml_contracts::InputDocument;
//! use pubxml_serde::json::from_json_str_case_insensitive;
//! use pubxml_serde::xml::to_xml_string;
//!
//! let input: InputDocument = from_json_str_case_insensitive(r#"{"Title": "Report"}"#)?;
//! let xml = to_xml_string(&published_item)?;
//! ```

pub mod error;
pub mod json;

#[cfg(feature = "xml")]
pub mod xml;

pub use error::{Result, SerdeError};

pub use json::{from_json_slice_case_insensitive, from_json_str_case_insensitive, lowercase_keys};

#[cfg(feature = "xml")]
pub use xml::{ToXml, to_xml_string, to_xml_vec, to_xml_writer};
