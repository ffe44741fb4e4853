//! One mapper per response shape, each producing canonical [`Paper`] records.
//!
//! Mappers never drop an entry: identifier failures fall back to a value the
//! mapper picks explicitly.

use serde_json::{Map, Value};

use super::coerce::{coerce, coerce_opt};
use super::fields::{self, DATE_FIELDS, ENTRY_ID_FIELDS, KEYED_DATE_FIELDS, PDF_FIELDS};
use super::identifier::{
    identifier_from_link, identifier_from_value, pdf_tail, pdf_tail_from_value,
    strip_identifier_noise,
};
use crate::models::Paper;

/// Map an array response. Objects, bare URL strings and stray scalars each
/// produce exactly one record, in input order.
#[must_use]
pub fn map_array(items: &[Value]) -> Vec<Paper> {
    items.iter().map(map_array_item).collect()
}

fn map_array_item(item: &Value) -> Paper {
    match item {
        Value::Object(obj) => map_paper_object(obj, item),
        Value::String(url) => map_url_entry(url),
        other => Paper { title: coerce(other), ..Paper::default() },
    }
}

/// Map a single paper-like object (e.g. a serialized `arxiv.Result`).
#[must_use]
pub fn map_paper_object(obj: &Map<String, Value>, whole: &Value) -> Paper {
    let pdf = fields::first_present(obj, PDF_FIELDS);

    // A present PDF link wins even when unusable; entry ids are only a fallback
    let candidate = match pdf {
        Some(link) => Some(identifier_from_link(link)),
        None => fields::first_present(obj, ENTRY_ID_FIELDS).map(identifier_from_value),
    };

    let identifier = candidate
        .map(|result| {
            result.unwrap_or_else(|err| {
                tracing::debug!(error = %err, "no identifier in paper object");
                String::new()
            })
        })
        .map(|id| strip_identifier_noise(&id))
        .unwrap_or_default();

    let title = [
        coerce_opt(fields::field(obj, "title")),
        coerce_opt(pdf),
        identifier.clone(),
    ]
    .into_iter()
    .find(|candidate| !candidate.is_empty())
    .unwrap_or_else(|| coerce(whole));

    let category = match fields::field(obj, "primary_category") {
        Some(primary) => coerce(primary),
        None => first_category(obj),
    };

    Paper {
        title,
        authors: author_list(obj.get("authors")),
        summary: coerce_opt(fields::first_present(obj, fields::SUMMARY_FIELDS)),
        identifier,
        date: coerce_opt(fields::first_present(obj, DATE_FIELDS)),
        category,
    }
}

fn first_category(obj: &Map<String, Value>) -> String {
    match obj.get("categories") {
        Some(Value::Array(categories)) => coerce_opt(categories.first()),
        _ => String::new(),
    }
}

/// Map a list of bare URLs (or IDs).
#[must_use]
pub fn map_url_list(urls: &[Value]) -> Vec<Paper> {
    urls.iter()
        .map(|url| match url {
            Value::String(s) => map_url_entry(s),
            other => {
                let raw = coerce(other);
                Paper::bare(raw.clone(), raw)
            }
        })
        .collect()
}

/// Map one bare URL: its tail becomes the identifier and the title
/// `arXiv:<identifier>`. Unusable URLs are kept verbatim.
#[must_use]
pub fn map_url_entry(url: &str) -> Paper {
    match pdf_tail(url) {
        Ok(identifier) => Paper::bare(format!("arXiv:{identifier}"), identifier),
        Err(err) => {
            tracing::debug!(error = %err, "keeping raw URL as identifier");
            Paper::bare(url, url)
        }
    }
}

/// Map an object keyed by URL or identifier, in the map's key order.
#[must_use]
pub fn map_keyed(entries: &Map<String, Value>) -> Vec<Paper> {
    entries.iter().map(|(key, value)| map_keyed_entry(key, value)).collect()
}

fn map_keyed_entry(key: &str, value: &Value) -> Paper {
    let title = fields::field_of(value, "title").map_or_else(|| key.to_string(), coerce);

    let key_value = Value::String(key.to_string());
    let pdf = fields::field_of(value, "pdf_url").unwrap_or(&key_value);
    let identifier = pdf_tail_from_value(pdf).unwrap_or_else(|err| {
        tracing::debug!(error = %err, key, "falling back to key as identifier");
        key.to_string()
    });

    let meta = value.as_object();
    Paper {
        title,
        authors: author_list(meta.and_then(|m| m.get("authors"))),
        summary: coerce_opt(fields::field_of(value, "summary")),
        identifier,
        date: coerce_opt(meta.and_then(|m| fields::first_present(m, KEYED_DATE_FIELDS))),
        category: coerce_opt(fields::field_of(value, "category")),
    }
}

fn author_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(authors)) => authors.iter().map(coerce).collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map_one(item: Value) -> Paper {
        let mut papers = map_array(std::slice::from_ref(&item));
        assert_eq!(papers.len(), 1);
        papers.remove(0)
    }

    #[test]
    fn test_full_arxiv_result() {
        let paper = map_one(json!({
            "title": "Attention Is All You Need",
            "authors": [{"name": "Ashish Vaswani"}, "Noam Shazeer"],
            "summary": "The dominant sequence transduction models...",
            "pdf_url": "http://arxiv.org/pdf/1706.03762v7",
            "entry_id": "http://arxiv.org/abs/1706.03762v7",
            "primary_category": "cs.CL",
            "categories": ["cs.CL", "cs.LG"],
            "published": "2017-06-12 17:57:34+00:00",
            "updated": "2023-08-02 00:41:18+00:00"
        }));

        assert_eq!(paper.title, "Attention Is All You Need");
        assert_eq!(paper.authors, vec!["Ashish Vaswani", "Noam Shazeer"]);
        assert_eq!(paper.summary, "The dominant sequence transduction models...");
        assert_eq!(paper.identifier, "1706.03762v7");
        assert_eq!(paper.category, "cs.CL");
        assert_eq!(paper.date, "2017-06-12 17:57:34+00:00");
    }

    #[test]
    fn test_title_falls_back_to_pdf_link_then_identifier_then_item() {
        let paper = map_one(json!({"pdf": "http://arxiv.org/pdf/1234.5678.pdf"}));
        assert_eq!(paper.title, "http://arxiv.org/pdf/1234.5678.pdf");
        assert_eq!(paper.identifier, "1234.5678");

        let paper = map_one(json!({"entry_id": "http://arxiv.org/abs/2101.00001v1"}));
        assert_eq!(paper.title, "2101.00001v1");

        let paper = map_one(json!({"foo": 1}));
        assert_eq!(paper.title, r#"{"foo":1}"#);
        assert_eq!(paper.identifier, "");
    }

    #[test]
    fn test_summary_description_fallback() {
        assert_eq!(map_one(json!({"description": "d"})).summary, "d");
        assert_eq!(map_one(json!({"summary": "s", "description": "d"})).summary, "s");
        assert_eq!(map_one(json!({"summary": "", "description": "d"})).summary, "d");
    }

    #[test]
    fn test_category_from_categories_list() {
        assert_eq!(map_one(json!({"categories": ["math.GT", "cs.LG"]})).category, "math.GT");
        assert_eq!(map_one(json!({"categories": "cs.LG"})).category, "");
        assert_eq!(map_one(json!({"categories": []})).category, "");
    }

    #[test]
    fn test_date_priority() {
        assert_eq!(map_one(json!({"updated": "u", "published": "p"})).date, "p");
        assert_eq!(map_one(json!({"updated": "u"})).date, "u");
        assert_eq!(map_one(json!({"date": 2020})).date, "2020");
    }

    #[test]
    fn test_identifier_sources_in_priority_order() {
        let paper = map_one(json!({
            "source_url": "https://arxiv.org/abs/1111.1111",
            "entry_id": "http://arxiv.org/abs/2222.2222",
            "id": "3333.3333"
        }));
        assert_eq!(paper.identifier, "1111.1111");

        assert_eq!(map_one(json!({"id": "arXiv:3333.3333"})).identifier, "3333.3333");
        assert_eq!(map_one(json!({"id": 42})).identifier, "42");
    }

    #[test]
    fn test_non_text_identifier_degrades_to_empty() {
        let paper = map_one(json!({"title": "T", "pdf_url": {"href": "x"}, "id": "9"}));
        assert_eq!(paper.identifier, "");
        assert_eq!(paper.title, "T");
    }

    #[test]
    fn test_numeric_pdf_link_is_not_an_identifier() {
        let paper = map_one(json!({"pdf_url": 12345, "entry_id": "http://arxiv.org/abs/1"}));
        assert_eq!(paper.identifier, "");
        assert_eq!(paper.title, "12345");

        assert_eq!(map_one(json!({"source_url": 7.5})).identifier, "");
        assert_eq!(map_one(json!({"entry_id": 2006.08233})).identifier, "2006.08233");
    }

    #[test]
    fn test_keyed_entry_numeric_pdf_url_falls_back_to_key() {
        let entries = json!({"my-key": {"pdf_url": 5}});
        let papers = map_keyed(entries.as_object().unwrap());

        assert_eq!(papers[0].identifier, "my-key");
        assert_eq!(papers[0].title, "my-key");
    }

    #[test]
    fn test_authors_must_be_a_list() {
        assert!(map_one(json!({"authors": "A. Author"})).authors.is_empty());
        assert_eq!(map_one(json!({"authors": [1, null]})).authors, vec!["1", ""]);
    }

    #[test]
    fn test_bare_strings_and_scalars_in_array() {
        let papers = map_array(&[json!("http://arxiv.org/pdf/2006.08233v3.pdf"), json!(null), json!(7)]);
        assert_eq!(papers.len(), 3);
        assert_eq!(papers[0].identifier, "2006.08233v3");
        assert_eq!(papers[0].title, "arXiv:2006.08233v3");
        assert_eq!(papers[1], Paper::default());
        assert_eq!(papers[2].title, "7");
    }

    #[test]
    fn test_url_list() {
        let papers = map_url_list(&[json!("http://arxiv.org/pdf/2006.08233v3.pdf")]);
        assert_eq!(papers, vec![Paper::bare("arXiv:2006.08233v3", "2006.08233v3")]);
    }

    #[test]
    fn test_url_list_unusable_entries_kept_verbatim() {
        let papers = map_url_list(&[json!("/"), json!(""), json!(5), json!({"u": 1})]);
        assert_eq!(papers.len(), 4);
        assert_eq!(papers[0], Paper::bare("/", "/"));
        assert_eq!(papers[1], Paper::bare("", ""));
        assert_eq!(papers[2], Paper::bare("5", "5"));
        assert_eq!(papers[3].identifier, r#"{"u":1}"#);
    }

    #[test]
    fn test_keyed_entry() {
        let entries = json!({
            "http://x/pdf/9999.1234": {"title": "Foo", "authors": ["A", "B"]}
        });
        let papers = map_keyed(entries.as_object().unwrap());

        assert_eq!(papers.len(), 1);
        assert_eq!(papers[0].title, "Foo");
        assert_eq!(papers[0].authors, vec!["A", "B"]);
        assert_eq!(papers[0].identifier, "9999.1234");
        assert_eq!(papers[0].summary, "");
        assert_eq!(papers[0].date, "");
        assert_eq!(papers[0].category, "");
    }

    #[test]
    fn test_keyed_entry_pdf_url_and_metadata() {
        let entries = json!({
            "paper-a": {
                "pdf_url": "https://arxiv.org/pdf/2101.00001v2.pdf",
                "summary": "S",
                "published": "2021-01-01",
                "category": "cs.AI"
            }
        });
        let paper = &map_keyed(entries.as_object().unwrap())[0];

        assert_eq!(paper.title, "paper-a");
        assert_eq!(paper.identifier, "2101.00001v2");
        assert_eq!(paper.summary, "S");
        assert_eq!(paper.date, "2021-01-01");
        assert_eq!(paper.category, "cs.AI");
    }

    #[test]
    fn test_keyed_entry_fallbacks() {
        let entries = json!({
            "1234.5678": null,
            "//": {"title": {"name": "Nested"}},
            "k": {"pdf_url": ["not", "text"]}
        });
        let papers = map_keyed(entries.as_object().unwrap());

        assert_eq!(papers[0], Paper::bare("1234.5678", "1234.5678"));
        assert_eq!(papers[1].title, "Nested");
        assert_eq!(papers[1].identifier, "//");
        assert_eq!(papers[2].identifier, "k");
    }
}
