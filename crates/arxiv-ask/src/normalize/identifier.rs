//! Identifier extraction from URLs, entry paths and raw ID fields.
//!
//! `https://arxiv.org/abs/2006.08233v3`, `http://arxiv.org/pdf/2006.08233v3.pdf`
//! and `arXiv: 2006.08233v3` all reduce to `2006.08233v3`.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::coerce::number_text;
use crate::error::IdentifierError;

static PDF_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.pdf$").expect("valid pdf suffix pattern"));
static URL_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://").expect("valid scheme pattern"));
static ARXIV_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^arxiv:\s*").expect("valid arxiv prefix pattern"));
static ABS_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^abs/").expect("valid abs prefix pattern"));

/// Last non-empty `/`-separated segment, trimmed.
///
/// A candidate without `/` is its own tail. Returns `None` when every
/// segment is blank.
#[must_use]
pub fn tail_segment(candidate: &str) -> Option<&str> {
    candidate.rsplit('/').map(str::trim).find(|segment| !segment.is_empty())
}

/// Strip a single trailing `.pdf` (case-insensitive).
#[must_use]
pub fn strip_pdf_suffix(segment: &str) -> Cow<'_, str> {
    PDF_SUFFIX.replace(segment, "")
}

/// Remove scheme, `arxiv:`, `abs/` and `.pdf` noise until nothing changes.
///
/// Running to a fixed point makes the result stable under repetition, so
/// `x.pdf.pdf` and `arXiv:arXiv:1` are fully cleaned.
#[must_use]
pub fn strip_identifier_noise(raw: &str) -> String {
    let mut current = raw.trim().to_string();
    loop {
        let next = strip_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn strip_once(raw: &str) -> String {
    let s = PDF_SUFFIX.replace(raw, "");
    let s = URL_SCHEME.replace(&s, "");
    let s = ARXIV_PREFIX.replace(&s, "");
    let s = ABS_PREFIX.replace(&s, "");
    let s = PDF_SUFFIX.replace(&s, "");
    s.trim().to_string()
}

/// Derive a normalized short identifier from a URL, entry path or raw ID.
///
/// Total and idempotent: `extract_identifier(&extract_identifier(x)) == extract_identifier(x)`.
/// Returns `""` when the candidate has no usable tail.
#[must_use]
pub fn extract_identifier(candidate: &str) -> String {
    tail_segment(candidate).map(strip_identifier_noise).unwrap_or_default()
}

/// Full identifier extraction from an `entry_id`/`id` style value.
///
/// Numbers are accepted and rendered canonically.
pub fn identifier_from_value(value: &Value) -> Result<String, IdentifierError> {
    let text = candidate_text(value)?;
    non_empty(extract_identifier(&text), &text)
}

/// Full identifier extraction from a link field (`pdf_url`, `pdf`, `source_url`).
///
/// Links must be strings; a number here is a malformed link, not an id.
pub fn identifier_from_link(value: &Value) -> Result<String, IdentifierError> {
    let link = link_text(value)?;
    non_empty(extract_identifier(link), link)
}

fn non_empty(identifier: String, candidate: &str) -> Result<String, IdentifierError> {
    if identifier.is_empty() {
        return Err(IdentifierError::NoTail { candidate: candidate.to_string() });
    }
    Ok(identifier)
}

/// Tail segment with `.pdf` stripped, for link-like candidates.
pub fn pdf_tail(candidate: &str) -> Result<String, IdentifierError> {
    match tail_segment(candidate).map(strip_pdf_suffix) {
        Some(tail) if !tail.is_empty() => Ok(tail.into_owned()),
        _ => Err(IdentifierError::NoTail { candidate: candidate.to_string() }),
    }
}

/// [`pdf_tail`] for a JSON link field. Only strings are links.
pub fn pdf_tail_from_value(value: &Value) -> Result<String, IdentifierError> {
    pdf_tail(link_text(value)?)
}

fn link_text(value: &Value) -> Result<&str, IdentifierError> {
    match value {
        Value::String(s) => Ok(s.as_str()),
        other => Err(IdentifierError::NotText { kind: kind_name(other) }),
    }
}

fn candidate_text(value: &Value) -> Result<Cow<'_, str>, IdentifierError> {
    match value {
        Value::String(s) => Ok(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Ok(Cow::Owned(number_text(n))),
        other => Err(IdentifierError::NotText { kind: kind_name(other) }),
    }
}

const fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_abs_url() {
        assert_eq!(extract_identifier("https://arxiv.org/abs/2006.08233v3"), "2006.08233v3");
    }

    #[test]
    fn test_arxiv_prefix_with_space_and_pdf() {
        assert_eq!(extract_identifier("arxiv: 2006.08233.pdf"), "2006.08233");
        assert_eq!(extract_identifier("arXiv:2006.08233"), "2006.08233");
        assert_eq!(extract_identifier("ARXIV:2006.08233"), "2006.08233");
    }

    #[test]
    fn test_pdf_url() {
        assert_eq!(extract_identifier("http://arxiv.org/pdf/2006.08233v3.pdf"), "2006.08233v3");
        assert_eq!(extract_identifier("http://arxiv.org/pdf/2006.08233v3.PDF"), "2006.08233v3");
    }

    #[test]
    fn test_trailing_slash_uses_last_non_empty_segment() {
        assert_eq!(extract_identifier("http://arxiv.org/abs/1810.04805/"), "1810.04805");
    }

    #[test]
    fn test_bare_identifier_unchanged() {
        assert_eq!(extract_identifier("1810.04805v2"), "1810.04805v2");
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(extract_identifier(""), "");
        assert_eq!(extract_identifier("///"), "");
        assert_eq!(extract_identifier(" / "), "");
        assert_eq!(extract_identifier("arxiv:"), "");
    }

    #[test]
    fn test_repeated_noise_reaches_fixed_point() {
        assert_eq!(strip_identifier_noise("x.pdf.pdf.pdf"), "x");
        assert_eq!(strip_identifier_noise("arXiv:arXiv: 1"), "1");
        assert_eq!(strip_identifier_noise("abs/2101.00001"), "2101.00001");
        assert_eq!(strip_identifier_noise("https://2101.00001"), "2101.00001");
    }

    #[test]
    fn test_idempotent_on_samples() {
        for sample in [
            "https://arxiv.org/abs/2006.08233v3",
            "arxiv: 2006.08233.pdf",
            "arXiv:arXiv:x.pdf.pdf",
            "http://x/pdf/9999.1234",
            "  spaced  ",
            "",
        ] {
            let once = extract_identifier(sample);
            assert_eq!(extract_identifier(&once), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn test_identifier_from_value() {
        assert_eq!(
            identifier_from_value(&json!("http://arxiv.org/abs/2006.08233v3")).unwrap(),
            "2006.08233v3"
        );
        assert_eq!(identifier_from_value(&json!(2006.08233)).unwrap(), "2006.08233");
        assert_eq!(
            identifier_from_value(&json!({"href": "x"})),
            Err(IdentifierError::NotText { kind: "object" })
        );
        assert_eq!(identifier_from_value(&json!("https://arxiv.org/")).unwrap(), "arxiv.org");
        assert!(matches!(identifier_from_value(&json!("//")), Err(IdentifierError::NoTail { .. })));
    }

    #[test]
    fn test_pdf_tail_keeps_prefixes() {
        assert_eq!(pdf_tail_from_value(&json!("http://x/pdf/9999.1234")).unwrap(), "9999.1234");
        assert_eq!(pdf_tail_from_value(&json!("arxiv:1.pdf")).unwrap(), "arxiv:1");
        assert!(matches!(pdf_tail_from_value(&json!(".pdf")), Err(IdentifierError::NoTail { .. })));
        assert!(matches!(pdf_tail_from_value(&json!(true)), Err(IdentifierError::NotText { .. })));
        assert_eq!(
            pdf_tail_from_value(&json!(5)),
            Err(IdentifierError::NotText { kind: "number" })
        );
    }

    #[test]
    fn test_identifier_from_link_rejects_numbers() {
        assert_eq!(
            identifier_from_link(&json!("https://arxiv.org/pdf/2006.08233v3.pdf")).unwrap(),
            "2006.08233v3"
        );
        assert_eq!(
            identifier_from_link(&json!(12345)),
            Err(IdentifierError::NotText { kind: "number" })
        );
        assert!(matches!(identifier_from_link(&json!("/")), Err(IdentifierError::NoTail { .. })));
    }
}
