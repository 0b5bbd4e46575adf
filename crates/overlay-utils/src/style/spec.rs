//! Style input classification.

use serde_json::{Map, Value};

/// A style as supplied by the caller, resolved once before normalization.
///
/// Objects and arrays both count as mappings in the overlay configuration
/// model; an array's keys are its decimal indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleSpec<'a> {
    /// Declaration text, e.g. `"--gap: 4px; --tone: dark"`.
    Text(&'a str),
    /// Property name to value.
    Mapping(&'a Map<String, Value>),
    /// Index-keyed values.
    Sequence(&'a [Value]),
    /// Anything else: null, numbers, booleans. Normalizes to nothing.
    Other,
}

impl<'a> From<&'a Value> for StyleSpec<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::String(text) => StyleSpec::Text(text),
            Value::Object(map) => StyleSpec::Mapping(map),
            Value::Array(items) => StyleSpec::Sequence(items),
            Value::Null | Value::Bool(_) | Value::Number(_) => StyleSpec::Other,
        }
    }
}

impl<'a> From<Option<&'a Value>> for StyleSpec<'a> {
    fn from(value: Option<&'a Value>) -> Self {
        value.map_or(StyleSpec::Other, StyleSpec::from)
    }
}

impl<'a> From<&'a str> for StyleSpec<'a> {
    fn from(text: &'a str) -> Self {
        StyleSpec::Text(text)
    }
}

impl<'a> From<&'a String> for StyleSpec<'a> {
    fn from(text: &'a String) -> Self {
        StyleSpec::Text(text)
    }
}

impl<'a> From<&'a Map<String, Value>> for StyleSpec<'a> {
    fn from(map: &'a Map<String, Value>) -> Self {
        StyleSpec::Mapping(map)
    }
}
