//! # pubxml-contracts
//!
//! Data contracts for the publication XML converter.
//!
//! - [`input`] - the semi-structured document submitted for conversion
//! - [`output`] - the strictly ordered `PublishedItem` model rendered to XML
//!
//! The input side is deliberately forgiving: every field is optional and
//! absent collections read as empty slices. The output side is strict: the
//! declaration order of every struct's fields is the element order of the
//! rendered XML document.

#![warn(missing_docs)]

pub mod input;
pub mod output;

pub use input::{Contact, ContactInformationBlock, ContactSection, InputDocument, ReportMetadata};
pub use output::{
    ContactInfo, ContactInformation, Person, PersonGroup, PersonGroupMember, Phone, PublishedItem,
};
