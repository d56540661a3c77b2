//! XML rendering for the `PublishedItem` model.
//!
//! Rendering is done by writing quick-xml events directly. Each output type
//! implements [`ToXml`] and writes its children in a fixed order, which is the
//! order downstream consumers rely on.
//!
//! ## Document shape
//!
//! ```xml
//! <?xml version="1.0" encoding="utf-8"?>
//! <PublishedItem>
//!   <Title>...</Title>
//!   <Countries>US,BR</Countries>
//!   <PublishedDate>2024-08-26T18:19:59Z</PublishedDate>
//!   <ContactInformation>
//!     <PersonGroup sequence="1">
//!       <Name>Media Contact</Name>
//!       <PersonGroupMember>
//!         <Person>
//!           <FamilyName>Johnsen</FamilyName>
//!           <GivenName>Mike</GivenName>
//!           <DisplayName>Mike Johnsen</DisplayName>
//!           <JobTitle>...</JobTitle>
//!           <ContactInfo>
//!             <Phone>
//!               <Number>1-646-731-1347</Number>
//!             </Phone>
//!           </ContactInfo>
//!         </Person>
//!       </PersonGroupMember>
//!     </PersonGroup>
//!   </ContactInformation>
//! </PublishedItem>
//! ```
//!
//! ## Rules
//!
//! - UTF-8 without a byte-order mark, XML declaration always present
//! - two-space indentation
//! - no namespace declarations or prefixes
//! - `None` children are omitted; empty strings render as `<Element/>`
//! - text escapes only `&`, `<` and `>`

pub mod ser;
mod utils;

pub use ser::{ToXml, XmlSerializer, to_xml_string, to_xml_vec, to_xml_writer};
