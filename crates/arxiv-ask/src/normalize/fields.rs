//! Field-priority chains.
//!
//! Each chain is an ordered list of field names; a lookup folds over it and
//! stops at the first *present* value. `null`, `""`, `false` and `0` count as
//! absent, everything else (including empty arrays and objects) as present.

use serde_json::{Map, Value};

/// Fields holding a direct PDF or source link, in priority order.
pub const PDF_FIELDS: &[&str] = &["pdf_url", "pdf", "source_url"];

/// Fields an identifier is read from when no PDF link is present.
pub const ENTRY_ID_FIELDS: &[&str] = &["entry_id", "id"];

/// Fields holding an abstract.
pub const SUMMARY_FIELDS: &[&str] = &["summary", "description"];

/// Fields holding a publication date in array-shaped responses.
pub const DATE_FIELDS: &[&str] = &["date", "published", "updated"];

/// Fields holding a publication date in keyed-answer responses.
pub const KEYED_DATE_FIELDS: &[&str] = &["date", "published"];

/// Whether a value counts as present for a priority chain.
#[must_use]
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Look up a single field, returning it only if present.
#[must_use]
pub fn field<'a>(obj: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    obj.get(name).filter(|v| is_present(v))
}

/// First present value among `names`, in order.
#[must_use]
pub fn first_present<'a>(obj: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names.iter().find_map(|name| field(obj, name))
}

/// Like [`field`], but for a value that may not be an object at all.
#[must_use]
pub fn field_of<'a>(value: &'a Value, name: &str) -> Option<&'a Value> {
    value.as_object().and_then(|obj| field(obj, name))
}
