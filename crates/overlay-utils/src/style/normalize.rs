//! Custom-property filtering and serialization.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use super::rejection::StyleRejection;
use super::spec::StyleSpec;
use crate::diagnostics::{Diagnostics, TracingDiagnostics};

/// Prefix every accepted property name must start with.
pub const CUSTOM_PROPERTY_PREFIX: &str = "--";

/// One `name : value` declaration. The name may be empty; the value runs to
/// the next `;`.
static DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Za-z0-9_-]*)\s*:\s*([^;]*)").expect("declaration pattern is valid")
});

/// Normalizes a style, logging rejected entries through `tracing`.
///
/// Accepts declaration text or a property mapping; anything else yields an
/// empty string.
///
/// ```rust
/// use overlay_utils::normalize_style;
/// use serde_json::json;
///
/// assert_eq!(normalize_style(&json!("--a: 1; --b:2")), "--a:1;--b:2");
/// assert_eq!(normalize_style(&json!({ "--x": "10px", "color": "blue" })), "--x:10px");
/// assert_eq!(normalize_style(&json!(null)), "");
/// ```
pub fn normalize_style(style: &Value) -> String {
    normalize_style_with(style, &mut TracingDiagnostics)
}

/// Normalizes a style, reporting each dropped entry to `diagnostics`.
///
/// The result holds `name:value` pairs joined by `;`, in the order names were
/// first seen. A repeated name keeps its first position and its last value.
pub fn normalize_style_with<'a, S, D>(style: S, diagnostics: &mut D) -> String
where
    S: Into<StyleSpec<'a>>,
    D: Diagnostics + ?Sized,
{
    let mut props = IndexMap::new();
    match style.into() {
        StyleSpec::Text(text) => collect_text(text, &mut props, diagnostics),
        StyleSpec::Mapping(map) => collect_mapping(map, &mut props, diagnostics),
        StyleSpec::Sequence(items) => collect_sequence(items, diagnostics),
        StyleSpec::Other => {}
    }
    serialize(&props)
}

fn is_custom_property(name: &str) -> bool {
    name.starts_with(CUSTOM_PROPERTY_PREFIX)
}

fn collect_text<'a, D>(text: &'a str, props: &mut IndexMap<&'a str, &'a str>, diagnostics: &mut D)
where
    D: Diagnostics + ?Sized,
{
    for caps in DECLARATION.captures_iter(text) {
        let (_, [name, value]) = caps.extract();
        if is_custom_property(name) {
            props.insert(name, value.trim());
        } else {
            diagnostics.reject(&StyleRejection::NotCustomProperty {
                property: name.to_string(),
            });
        }
    }
}

fn collect_mapping<'a, D>(
    map: &'a Map<String, Value>,
    props: &mut IndexMap<&'a str, &'a str>,
    diagnostics: &mut D,
) where
    D: Diagnostics + ?Sized,
{
    for (name, value) in map {
        match value {
            Value::String(value) if is_custom_property(name) => {
                props.insert(name, value);
            }
            _ if is_custom_property(name) => {
                diagnostics.reject(&StyleRejection::NonStringValue {
                    property: name.clone(),
                });
            }
            _ => {
                diagnostics.reject(&StyleRejection::NotCustomProperty {
                    property: name.clone(),
                });
            }
        }
    }
}

// Index keys never start with `--`, so every entry is dropped.
fn collect_sequence<D>(items: &[Value], diagnostics: &mut D)
where
    D: Diagnostics + ?Sized,
{
    for index in 0..items.len() {
        diagnostics.reject(&StyleRejection::NotCustomProperty {
            property: index.to_string(),
        });
    }
}

fn serialize(props: &IndexMap<&str, &str>) -> String {
    props
        .iter()
        .map(|(name, value)| format!("{name}:{value}"))
        .collect::<Vec<_>>()
        .join(";")
}
