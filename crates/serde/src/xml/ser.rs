//! XML serialization implementation.
//!
//! [`XmlSerializer`] wraps a quick-xml [`Writer`] configured for indentation and
//! exposes the handful of element shapes the output model needs. The element
//! order lives in the [`ToXml`] implementations at the bottom of this module.

use crate::error::{Result, SerdeError};
use crate::xml::utils;
use pubxml_contracts::{
    ContactInfo, ContactInformation, Person, PersonGroup, PersonGroupMember, Phone, PublishedItem,
};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Write;

/// Types that can render themselves as an XML element.
pub trait ToXml {
    /// Writes this value, including its own start and end tags.
    fn write_xml<W: Write>(&self, serializer: &mut XmlSerializer<W>) -> Result<()>;

    /// Whether the value is a document root and needs the XML declaration.
    fn is_root() -> bool
    where
        Self: Sized,
    {
        false
    }
}

/// Serialize a value to an XML string.
///
/// # Examples
///
/// ```ignore
/// use pubxml_serde::xml::to_xml_string;
///
/// let xml = to_xml_string(&published_item)?;
/// assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
/// ```
pub fn to_xml_string<T>(value: &T) -> Result<String>
where
    T: ToXml,
{
    let buffer = to_xml_vec(value)?;
    Ok(String::from_utf8(buffer)?)
}

/// Serialize a value to an XML byte vector.
pub fn to_xml_vec<T>(value: &T) -> Result<Vec<u8>>
where
    T: ToXml,
{
    let mut buffer = Vec::new();
    to_xml_writer(value, &mut buffer)?;
    Ok(buffer)
}

/// Serialize a value to an XML writer.
pub fn to_xml_writer<T, W>(value: &T, writer: W) -> Result<()>
where
    T: ToXml,
    W: Write,
{
    let mut serializer = XmlSerializer::new(writer);
    if T::is_root() {
        serializer.write_xml_declaration()?;
    }
    value.write_xml(&mut serializer)?;
    serializer.finish()
}

/// XML writer with fixed indentation and no namespace handling.
pub struct XmlSerializer<W: Write> {
    writer: Writer<W>,
    xml_declaration_written: bool,
    open_elements: Vec<&'static str>,
}

impl<W: Write> XmlSerializer<W> {
    /// Creates a new XML serializer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Writer::new_with_indent(writer, utils::INDENT_CHAR, utils::INDENT_SIZE),
            xml_declaration_written: false,
            open_elements: Vec::new(),
        }
    }

    /// Closes any element still open and flushes the writer.
    pub fn finish(mut self) -> Result<()> {
        while !self.open_elements.is_empty() {
            self.write_end_element()?;
        }
        self.writer.get_mut().flush()?;
        Ok(())
    }

    /// Writes the XML declaration if not already written.
    pub fn write_xml_declaration(&mut self) -> Result<()> {
        if !self.xml_declaration_written {
            self.writer.write_event(Event::Decl(BytesDecl::new(
                utils::XML_VERSION,
                Some(utils::XML_ENCODING),
                None,
            )))?;
            self.xml_declaration_written = true;
        }
        Ok(())
    }

    /// Opens a container element.
    pub fn write_start_element(&mut self, name: &'static str) -> Result<()> {
        self.write_start_element_with_attributes(name, &[])
    }

    /// Opens a container element carrying attributes, in the given order.
    pub fn write_start_element_with_attributes(
        &mut self,
        name: &'static str,
        attributes: &[(&str, &str)],
    ) -> Result<()> {
        let mut element = BytesStart::new(name);
        for &(key, value) in attributes {
            element.push_attribute((key, value));
        }
        self.writer.write_event(Event::Start(element))?;
        self.open_elements.push(name);
        Ok(())
    }

    /// Closes the most recently opened element.
    pub fn write_end_element(&mut self) -> Result<()> {
        if let Some(name) = self.open_elements.pop() {
            self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        }
        Ok(())
    }

    /// Writes `<name>text</name>`, or `<name/>` when the text is empty.
    ///
    /// Fails without writing anything when the text holds a character XML 1.0
    /// does not allow.
    pub fn write_simple_element(&mut self, name: &str, text: &str) -> Result<()> {
        if let Some(c) = utils::find_invalid_char(text) {
            return Err(SerdeError::Custom(format!(
                "character U+{:04X} is not allowed in XML element <{}>",
                c as u32, name
            )));
        }

        if text.is_empty() {
            self.writer
                .write_event(Event::Empty(BytesStart::new(name)))?;
            return Ok(());
        }

        self.writer.write_event(Event::Start(BytesStart::new(name)))?;
        self.writer
            .write_event(Event::Text(BytesText::from_escaped(utils::escape_text(
                text,
            ))))?;
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    /// Writes a simple element only when a value is present.
    pub fn write_optional_element(&mut self, name: &str, text: Option<&str>) -> Result<()> {
        match text {
            Some(text) => self.write_simple_element(name, text),
            None => Ok(()),
        }
    }

    /// Writes a child value only when present.
    pub fn write_optional<T: ToXml>(&mut self, value: Option<&T>) -> Result<()> {
        match value {
            Some(value) => value.write_xml(self),
            None => Ok(()),
        }
    }
}

impl ToXml for PublishedItem {
    fn write_xml<W: Write>(&self, serializer: &mut XmlSerializer<W>) -> Result<()> {
        serializer.write_start_element("PublishedItem")?;
        serializer.write_simple_element("Title", &self.title)?;
        serializer.write_simple_element("Countries", &self.countries)?;
        serializer.write_simple_element("PublishedDate", &self.published_date)?;
        serializer.write_optional(self.contact_information.as_ref())?;
        serializer.write_end_element()
    }

    fn is_root() -> bool {
        true
    }
}

impl ToXml for ContactInformation {
    fn write_xml<W: Write>(&self, serializer: &mut XmlSerializer<W>) -> Result<()> {
        serializer.write_start_element("ContactInformation")?;
        for group in &self.person_groups {
            group.write_xml(serializer)?;
        }
        serializer.write_end_element()
    }
}

impl ToXml for PersonGroup {
    fn write_xml<W: Write>(&self, serializer: &mut XmlSerializer<W>) -> Result<()> {
        let sequence = self.sequence.to_string();
        serializer.write_start_element_with_attributes(
            "PersonGroup",
            &[(utils::SEQUENCE_ATTRIBUTE, sequence.as_str())],
        )?;
        serializer.write_simple_element("Name", &self.name)?;
        for member in &self.members {
            member.write_xml(serializer)?;
        }
        serializer.write_end_element()
    }
}

impl ToXml for PersonGroupMember {
    fn write_xml<W: Write>(&self, serializer: &mut XmlSerializer<W>) -> Result<()> {
        serializer.write_start_element("PersonGroupMember")?;
        self.person.write_xml(serializer)?;
        serializer.write_end_element()
    }
}

impl ToXml for Person {
    fn write_xml<W: Write>(&self, serializer: &mut XmlSerializer<W>) -> Result<()> {
        serializer.write_start_element("Person")?;
        serializer.write_optional_element("FamilyName", self.family_name.as_deref())?;
        serializer.write_optional_element("GivenName", self.given_name.as_deref())?;
        serializer.write_simple_element("DisplayName", &self.display_name)?;
        serializer.write_optional_element("JobTitle", self.job_title.as_deref())?;
        serializer.write_optional(self.contact_info.as_ref())?;
        serializer.write_end_element()
    }
}

impl ToXml for ContactInfo {
    fn write_xml<W: Write>(&self, serializer: &mut XmlSerializer<W>) -> Result<()> {
        serializer.write_start_element("ContactInfo")?;
        serializer.write_optional(self.phone.as_ref())?;
        serializer.write_end_element()
    }
}

impl ToXml for Phone {
    fn write_xml<W: Write>(&self, serializer: &mut XmlSerializer<W>) -> Result<()> {
        serializer.write_start_element("Phone")?;
        serializer.write_simple_element("Number", &self.number)?;
        serializer.write_end_element()
    }
}
