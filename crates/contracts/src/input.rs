//! Input document submitted for conversion.
//!
//! Field names are matched case-insensitively. The JSON layer lowercases every
//! object key before deserializing, so each field here is renamed to its
//! all-lowercase spelling (`firstName` is read as `firstname`).
//!
//! Nested collections are modeled as `Option<Vec<_>>` to mirror the wire shape,
//! but callers walk them through the slice accessors ([`ReportMetadata::sections`],
//! [`ContactSection::blocks`], [`ContactInformationBlock::contacts`]) which treat
//! an absent list as an empty one.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// The document describing a publishable item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputDocument {
    /// Opaque identifier. Not used by the transform.
    pub id: Option<String>,

    /// Report metadata holding the fallback title and the contact sections.
    #[serde(rename = "reportmetadata")]
    pub report_metadata: Option<ReportMetadata>,

    /// Country identifiers, in the order they should be listed.
    #[serde(rename = "countryids")]
    pub country_ids: Option<Vec<String>>,

    /// Item title.
    pub title: Option<String>,

    /// Publication timestamp with its original offset.
    #[serde(rename = "publishdate")]
    pub publish_date: Option<DateTime<FixedOffset>>,

    /// Workflow status code.
    pub status: Option<i64>,

    /// Whether this submission is a test run.
    #[serde(rename = "testrun")]
    pub test_run: Option<bool>,
}

impl InputDocument {
    /// Returns the country identifiers, or an empty slice when absent.
    pub fn country_ids(&self) -> &[String] {
        self.country_ids.as_deref().unwrap_or_default()
    }

    /// Returns the contact sections of the report metadata, or an empty slice
    /// when either level is absent.
    pub fn contact_sections(&self) -> &[ContactSection] {
        self.report_metadata
            .as_ref()
            .map(ReportMetadata::sections)
            .unwrap_or_default()
    }
}

/// Report-level metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportMetadata {
    /// Report title, used when the document has no title of its own.
    pub title: Option<String>,

    /// Ordered contact sections.
    #[serde(rename = "contactsection")]
    pub contact_section: Option<Vec<ContactSection>>,
}

impl ReportMetadata {
    /// Returns the contact sections, or an empty slice when absent.
    pub fn sections(&self) -> &[ContactSection] {
        self.contact_section.as_deref().unwrap_or_default()
    }
}

/// A section grouping contact information blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSection {
    /// Ordered contact information blocks.
    #[serde(rename = "contactinformation")]
    pub contact_information: Option<Vec<ContactInformationBlock>>,
}

impl ContactSection {
    /// Returns the contact information blocks, or an empty slice when absent.
    pub fn blocks(&self) -> &[ContactInformationBlock] {
        self.contact_information.as_deref().unwrap_or_default()
    }
}

/// A labelled list of contacts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInformationBlock {
    /// Label shared by every contact in the block.
    #[serde(rename = "contactheader")]
    pub contact_header: Option<String>,

    /// Ordered contacts.
    pub contacts: Option<Vec<Contact>>,
}

impl ContactInformationBlock {
    /// Returns the contacts, or an empty slice when absent.
    pub fn contacts(&self) -> &[Contact] {
        self.contacts.as_deref().unwrap_or_default()
    }
}

/// A single contact person.
///
/// `email` and `accreditation` are accepted on input but are not part of the
/// published output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    /// Given name.
    #[serde(rename = "firstname")]
    pub first_name: Option<String>,

    /// Family name.
    #[serde(rename = "lastname")]
    pub last_name: Option<String>,

    /// E-mail address. Never published.
    pub email: Option<String>,

    /// Job title.
    pub title: Option<String>,

    /// Free-form phone number.
    #[serde(rename = "phonenumber")]
    pub phone_number: Option<String>,

    /// Professional accreditation. Never published.
    pub accreditation: Option<String>,
}
