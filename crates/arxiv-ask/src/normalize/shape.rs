//! Detection of the top-level response shape.

use serde_json::{Map, Value};

/// The response shapes the service is known to return.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape<'a> {
    /// `[ {title, authors, ...}, ... ]`, possibly mixed with bare URL strings.
    ArrayOfObjects(&'a [Value]),
    /// `{ "answer": { "<url-or-id>": {title, pdf_url, ...}, ... } }`
    KeyedAnswerMap(&'a Map<String, Value>),
    /// `{ "answer": [ "<url-or-id>", ... ] }`
    UrlList(&'a [Value]),
    /// Anything else; normalizes to no papers.
    Unrecognized,
}

impl Shape<'_> {
    /// Short name used in log fields.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ArrayOfObjects(_) => "array_of_objects",
            Self::KeyedAnswerMap(_) => "keyed_answer_map",
            Self::UrlList(_) => "url_list",
            Self::Unrecognized => "unrecognized",
        }
    }

    /// Number of entries the shape will map to.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::ArrayOfObjects(items) | Self::UrlList(items) => items.len(),
            Self::KeyedAnswerMap(entries) => entries.len(),
            Self::Unrecognized => 0,
        }
    }

    /// Check if the shape maps to no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Classify a raw response. First match wins: arrays, then `answer` arrays,
/// then `answer` objects.
#[must_use]
pub fn classify(raw: &Value) -> Shape<'_> {
    match raw {
        Value::Array(items) => Shape::ArrayOfObjects(items),
        Value::Object(obj) => match obj.get("answer") {
            Some(Value::Array(urls)) => Shape::UrlList(urls),
            Some(Value::Object(entries)) => Shape::KeyedAnswerMap(entries),
            _ => Shape::Unrecognized,
        },
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Shape::Unrecognized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_array_wins() {
        let raw = json!([{"title": "x"}, "http://arxiv.org/pdf/1"]);
        assert!(matches!(classify(&raw), Shape::ArrayOfObjects(items) if items.len() == 2));
        assert_eq!(classify(&json!([])).name(), "array_of_objects");
    }

    #[test]
    fn test_answer_variants() {
        let urls = json!({"answer": ["a", "b"]});
        assert!(matches!(classify(&urls), Shape::UrlList(items) if items.len() == 2));

        let keyed = json!({"answer": {"k": {}}});
        assert!(matches!(classify(&keyed), Shape::KeyedAnswerMap(map) if map.len() == 1));
    }

    #[test]
    fn test_unrecognized() {
        for raw in [
            json!(null),
            json!({}),
            json!({"answer": "prose"}),
            json!({"answer": null}),
            json!({"results": []}),
            json!("text"),
            json!(3),
        ] {
            assert_eq!(classify(&raw), Shape::Unrecognized, "{raw}");
            assert!(classify(&raw).is_empty());
        }
    }
}
