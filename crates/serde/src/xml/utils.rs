//! Constants and helpers shared by the XML writer.

use std::borrow::Cow;

/// XML version written in the declaration.
pub const XML_VERSION: &str = "1.0";

/// Encoding label written in the declaration.
pub const XML_ENCODING: &str = "utf-8";

/// Indentation character.
pub const INDENT_CHAR: u8 = b' ';

/// Indentation width per nesting level.
pub const INDENT_SIZE: usize = 2;

/// Attribute carrying a person group's position.
pub const SEQUENCE_ATTRIBUTE: &str = "sequence";

/// Returns true if the character may appear in an XML 1.0 document.
pub fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\u{9}' | '\u{A}' | '\u{D}'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Returns the first character of `text` that XML 1.0 does not allow.
pub fn find_invalid_char(text: &str) -> Option<char> {
    text.chars().find(|&c| !is_xml_char(c))
}

/// Escapes element text.
///
/// Only `&`, `<` and `>` are replaced; quotes are left as-is in text content.
pub fn escape_text(text: &str) -> Cow<'_, str> {
    quick_xml::escape::partial_escape(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text() {
        assert_eq!(
            escape_text("Communications & Marketing"),
            "Communications &amp; Marketing"
        );
        assert_eq!(escape_text("a < b > c"), "a &lt; b &gt; c");
        assert_eq!(escape_text("Report > \"Best\""), "Report &gt; \"Best\"");
    }

    #[test]
    fn test_control_characters_are_not_xml_chars() {
        for c in ['\u{0}', '\u{1}', '\u{8}', '\u{B}', '\u{C}', '\u{E}', '\u{1F}', '\u{FFFE}'] {
            assert!(!is_xml_char(c), "U+{:04X}", c as u32);
        }
        for c in ['\t', '\n', '\r', ' ', 'é', '\u{1F600}'] {
            assert!(is_xml_char(c), "U+{:04X}", c as u32);
        }
    }

    #[test]
    fn test_find_invalid_char() {
        assert_eq!(find_invalid_char("A\u{1}B\u{2}"), Some('\u{1}'));
        assert_eq!(find_invalid_char("Line one\nLine two\t"), None);
    }

    #[test]
    fn test_escape_text_borrows_when_clean() {
        assert!(matches!(escape_text("Mike Johnsen"), Cow::Borrowed(_)));
    }
}
