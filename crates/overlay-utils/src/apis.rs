//! API object normalization.

use serde_json::{Map, Value};

use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::style::normalize_style_with;
use crate::util::is_truthy;

/// Key of the style entry in an overlay API object.
pub const STYLE_KEY: &str = "style";

/// Shallow-copies an overlay API object, normalizing its `style` entry.
///
/// Every other entry passes through unchanged. A `style` that is unset
/// (`null`, `false`, `0`, `""`) is copied as is. Anything that is not an
/// object yields an empty map. Rejected style entries are logged through
/// `tracing`.
///
/// ```rust
/// use overlay_utils::normalize_apis;
/// use serde_json::json;
///
/// let apis = normalize_apis(&json!({ "foo": 1, "style": "color: red; --a: 1" }));
/// assert_eq!(serde_json::Value::Object(apis), json!({ "foo": 1, "style": "--a:1" }));
///
/// assert!(normalize_apis(&json!(null)).is_empty());
/// ```
pub fn normalize_apis(apis: &Value) -> Map<String, Value> {
    normalize_apis_with(apis, &mut TracingDiagnostics)
}

pub(crate) fn normalize_apis_with<D>(apis: &Value, diagnostics: &mut D) -> Map<String, Value>
where
    D: Diagnostics + ?Sized,
{
    let mut normalized = match apis {
        Value::Object(map) => map.clone(),
        // Arrays spread into index-keyed entries.
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| (index.to_string(), item.clone()))
            .collect(),
        _ => return Map::new(),
    };

    if let Some(style) = normalized.get_mut(STYLE_KEY) {
        if is_truthy(style) {
            *style = Value::String(normalize_style_with(&*style, diagnostics));
        }
    }
    normalized
}
