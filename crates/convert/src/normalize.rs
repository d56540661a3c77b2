//! Normalization of semi-structured contact data.

/// Returns true when the value is absent, empty, or whitespace only.
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Builds the display form of a person's name.
///
/// Both parts are trimmed independently and joined with a single space; when
/// either part is empty the other is returned alone.
pub fn display_name(first: Option<&str>, last: Option<&str>) -> String {
    let first = first.unwrap_or_default().trim();
    let last = last.unwrap_or_default().trim();

    match (first.is_empty(), last.is_empty()) {
        (true, _) => last.to_string(),
        (_, true) => first.to_string(),
        _ => format!("{} {}", first, last),
    }
}

/// Normalizes a North American phone number to `1-DDD-DDD-DDDD`.
///
/// Only ASCII digits are considered. Anything other than eleven digits with a
/// leading `1` is returned unchanged.
pub fn normalize_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    if digits.len() == 11 && digits.starts_with('1') {
        format!(
            "{}-{}-{}-{}",
            &digits[..1],
            &digits[1..4],
            &digits[4..7],
            &digits[7..]
        )
    } else {
        raw.to_string()
    }
}
