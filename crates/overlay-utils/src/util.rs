//! Value helpers shared by the normalizers.

use serde_json::Value;

/// Whether a configuration value counts as "set".
///
/// `null`, `false`, zero and the empty string are unset; every other value,
/// including empty objects and arrays, is set.
///
/// ```rust
/// use overlay_utils::is_truthy;
/// use serde_json::json;
///
/// assert!(is_truthy(&json!("--a:1")));
/// assert!(is_truthy(&json!({})));
/// assert!(!is_truthy(&json!("")));
/// assert!(!is_truthy(&json!(0)));
/// ```
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
