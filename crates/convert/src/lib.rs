//! # pubxml-convert
//!
//! Turns an [`InputDocument`](pubxml_contracts::InputDocument) into a
//! `PublishedItem` XML document.
//!
//! The pipeline is strictly validate → map → serialize:
//!
//! - [`validation`] rejects documents that are not ready for publication,
//!   reporting every failed rule at once
//! - [`mapping`] flattens the nested contact structure into one person group
//!   per contact, normalizing names and phone numbers on the way
//! - [`converter`] ties both to the XML writer behind the
//!   [`PublishedItemConverter`] trait
//!
//! Every step is a pure, synchronous function of its input.

#![warn(missing_docs)]

pub mod converter;
pub mod error;
pub mod mapping;
pub mod normalize;
pub mod validation;

pub use converter::{PublishedItemConverter, XmlConverter};
pub use error::{ConvertError, ConvertResult};
pub use mapping::map_document;
pub use validation::{Rule, ValidationErrors, ValidationFailure, validate};
