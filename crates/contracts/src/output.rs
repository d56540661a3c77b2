//! The `PublishedItem` output model.
//!
//! Field declaration order is the element order downstream consumers expect,
//! so fields must not be reordered. Optional children are omitted from the
//! rendered document when `None`.

use serde::Serialize;

/// Root element of the published document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename = "PublishedItem", rename_all = "PascalCase")]
pub struct PublishedItem {
    /// Item title.
    pub title: String,

    /// Comma-joined country identifiers. Empty when none were supplied.
    pub countries: String,

    /// UTC publication timestamp formatted as `yyyy-MM-ddTHH:mm:ssZ`.
    pub published_date: String,

    /// Person groups, absent when no contact survived filtering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_information: Option<ContactInformation>,
}

/// Container for every emitted person group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContactInformation {
    /// Groups in document order.
    #[serde(rename = "PersonGroup")]
    pub person_groups: Vec<PersonGroup>,
}

impl ContactInformation {
    /// Wraps the groups, returning `None` when there are none.
    pub fn from_groups(person_groups: Vec<PersonGroup>) -> Option<Self> {
        if person_groups.is_empty() {
            None
        } else {
            Some(Self { person_groups })
        }
    }
}

/// A labelled group of people.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PersonGroup {
    /// 1-based position across the whole document. Rendered as an attribute.
    #[serde(rename = "@sequence")]
    pub sequence: u32,

    /// Group label.
    pub name: String,

    /// Group members.
    #[serde(rename = "PersonGroupMember")]
    pub members: Vec<PersonGroupMember>,
}

/// A single group member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PersonGroupMember {
    /// The member's person record.
    pub person: Person,
}

/// A published person record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Person {
    /// Family name as supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,

    /// Given name as supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,

    /// Trimmed "given family" display form.
    pub display_name: String,

    /// Job title as supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,

    /// Contact channels, absent when no phone number was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<ContactInfo>,
}

/// Contact channels for a person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContactInfo {
    /// Telephone channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
}

/// A telephone number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Phone {
    /// Normalized number.
    pub number: String,
}
