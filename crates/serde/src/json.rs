//! Case-insensitive JSON readers.
//!
//! Input documents arrive with arbitrary key casing. The `*_case_insensitive`
//! readers parse into a `serde_json::Value`, lowercase every object key with
//! [`lowercase_keys`], and then deserialize. Target types must therefore name
//! their fields in lowercase.
use crate::error::Result;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Deserialize a value from a JSON string, matching keys case-insensitively.
///
/// # Examples
///
/// ```ignore
/// use pubxml_serde::json::from_json_str_case_insensitive;
/// use pubxml_contracts::InputDocument;
///
/// let doc: InputDocument = from_json_str_case_insensitive(r#"{"TestRun": true}"#)?;
/// assert_eq!(doc.test_run, Some(true));
/// ```
pub fn from_json_str_case_insensitive<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let value: Value = serde_json::from_str(s)?;
    Ok(serde_json::from_value(lowercase_keys(value))?)
}

/// Deserialize a value from a JSON byte slice, matching keys case-insensitively.
pub fn from_json_slice_case_insensitive<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let value: Value = serde_json::from_slice(v)?;
    Ok(serde_json::from_value(lowercase_keys(value))?)
}

/// Recursively lowercases every object key in a JSON value.
///
/// Keys are folded in document order, so when two keys collide after
/// lowercasing the later one wins.
pub fn lowercase_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key.to_lowercase(), lowercase_keys(value)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(lowercase_keys).collect()),
        other => other,
    }
}
