//! Deterministic conversion of arbitrary JSON into display text.

use serde_json::{Map, Number, Value};

/// Convert any JSON value into a printable string. Never fails.
///
/// - `null` becomes `""`, strings pass through unchanged.
/// - Numbers and booleans use their canonical text (`1.0` renders as `1`).
/// - Arrays coerce each element and join with `", "`.
/// - Objects yield their string `title`, else their string `name`, else compact JSON.
#[must_use]
pub fn coerce(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::Array(items) => items.iter().map(coerce).collect::<Vec<_>>().join(", "),
        Value::Object(map) => object_text(map, value),
    }
}

/// Coerce an optional field, treating a missing field like `null`.
#[must_use]
pub fn coerce_opt(value: Option<&Value>) -> String {
    value.map(coerce).unwrap_or_default()
}

/// Canonical text for a JSON number.
pub(crate) fn number_text(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    // f64 Display drops a trailing ".0"
    n.as_f64().map_or_else(|| n.to_string(), |f| f.to_string())
}

fn object_text(map: &Map<String, Value>, whole: &Value) -> String {
    for key in ["title", "name"] {
        if let Some(Value::String(s)) = map.get(key) {
            return s.clone();
        }
    }
    serde_json::to_string(whole).unwrap_or_else(|_| whole.to_string())
}
