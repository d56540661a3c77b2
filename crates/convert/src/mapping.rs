//! Mapping from [`InputDocument`] to [`PublishedItem`].
//!
//! Contacts are fanned out into one [`PersonGroup`] each. Groups are numbered
//! by a single counter that runs across every section and block of the
//! document, starts at 1, and only advances when a group is emitted. Contacts
//! whose first and last names are both blank are dropped without consuming a
//! number.

use chrono::{DateTime, FixedOffset, Utc};
use pubxml_contracts::{
    Contact, ContactInfo, ContactInformation, ContactInformationBlock, InputDocument, Person,
    PersonGroup, PersonGroupMember, Phone, PublishedItem,
};
use tracing::debug;

use crate::normalize::{display_name, is_blank, normalize_phone};

/// Group label used when a block has no usable header.
pub const DEFAULT_GROUP_NAME: &str = "Contacts";

/// Output format of `PublishedDate`.
pub const PUBLISHED_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Maps an input document to the published output model.
///
/// Never fails: absent fields and collections fall back to empty values.
pub fn map_document(input: &InputDocument) -> PublishedItem {
    let contact_information = ContactInformation::from_groups(build_person_groups(input));

    debug!(
        groups = contact_information
            .as_ref()
            .map_or(0, |info| info.person_groups.len()),
        "Mapped document to PublishedItem"
    );

    PublishedItem {
        title: resolve_title(input),
        countries: input.country_ids().join(","),
        published_date: input
            .publish_date
            .map(format_published_date)
            .unwrap_or_default(),
        contact_information,
    }
}

/// Document title, falling back to the report metadata title.
fn resolve_title(input: &InputDocument) -> String {
    input
        .title
        .as_deref()
        .or_else(|| {
            input
                .report_metadata
                .as_ref()
                .and_then(|meta| meta.title.as_deref())
        })
        .unwrap_or_default()
        .to_string()
}

/// Formats a timestamp in UTC with second precision and a literal `Z`.
pub fn format_published_date(date: DateTime<FixedOffset>) -> String {
    date.with_timezone(&Utc)
        .format(PUBLISHED_DATE_FORMAT)
        .to_string()
}

/// Walks sections, blocks, and contacts in order, emitting one group per
/// surviving contact.
fn build_person_groups(input: &InputDocument) -> Vec<PersonGroup> {
    let mut groups = Vec::new();
    let mut next_sequence = 1u32;

    for block in input.contact_sections().iter().flat_map(|s| s.blocks()) {
        let name = group_name(block);

        for contact in block.contacts().iter().filter(|c| has_name(c)) {
            groups.push(PersonGroup {
                sequence: next_sequence,
                name: name.clone(),
                members: vec![PersonGroupMember {
                    person: build_person(contact),
                }],
            });
            next_sequence += 1;
        }
    }

    groups
}

/// The block's trimmed header, or [`DEFAULT_GROUP_NAME`] when blank.
fn group_name(block: &ContactInformationBlock) -> String {
    match block.contact_header.as_deref().map(str::trim) {
        Some(header) if !header.is_empty() => header.to_string(),
        _ => DEFAULT_GROUP_NAME.to_string(),
    }
}

fn has_name(contact: &Contact) -> bool {
    !(is_blank(contact.first_name.as_deref()) && is_blank(contact.last_name.as_deref()))
}

fn build_person(contact: &Contact) -> Person {
    Person {
        family_name: contact.last_name.clone(),
        given_name: contact.first_name.clone(),
        display_name: display_name(contact.first_name.as_deref(), contact.last_name.as_deref()),
        job_title: contact.title.clone(),
        contact_info: build_contact_info(contact),
    }
}

fn build_contact_info(contact: &Contact) -> Option<ContactInfo> {
    let raw = contact.phone_number.as_deref().filter(|p| !p.trim().is_empty())?;

    Some(ContactInfo {
        phone: Some(Phone {
            number: normalize_phone(raw),
        }),
    })
}
