//! Canonical paper record produced by the response normalizer.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::config::links;

/// A paper as rendered by every consumer, regardless of the response shape
/// it was recovered from.
///
/// Every field is always populated: missing data is the empty string or an
/// empty author list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    /// Display title. Falls back to a link or identifier when the source has none.
    pub title: String,

    /// Author names in source order.
    #[serde(default)]
    pub authors: Vec<String>,

    /// Abstract or description.
    #[serde(default)]
    pub summary: String,

    /// Short normalized identifier (an arXiv accession such as `2006.08233v3`).
    #[serde(rename = "arxivId", alias = "identifier", default)]
    pub identifier: String,

    /// Publication date exactly as the service sent it.
    #[serde(default)]
    pub date: String,

    /// Primary subject category (e.g. `cs.LG`).
    #[serde(default)]
    pub category: String,
}

impl Paper {
    /// Build a record that only knows its title and identifier.
    #[must_use]
    pub fn bare(title: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self { title: title.into(), identifier: identifier.into(), ..Self::default() }
    }

    /// Check if an identifier was recovered.
    #[must_use]
    pub fn has_identifier(&self) -> bool {
        !self.identifier.is_empty()
    }

    /// arXiv PDF link for this paper.
    #[must_use]
    pub fn pdf_url(&self) -> Option<String> {
        self.has_identifier().then(|| format!("{}{}.pdf", links::PDF_PREFIX, self.identifier))
    }

    /// arXiv abstract page for this paper.
    #[must_use]
    pub fn abs_url(&self) -> Option<String> {
        self.has_identifier().then(|| format!("{}{}", links::ABS_PREFIX, self.identifier))
    }

    /// Get author names as a comma-separated string.
    #[must_use]
    pub fn author_names(&self) -> String {
        self.authors.join(", ")
    }

    /// Publication timestamp parsed from `date`, if it is in a recognised format.
    #[must_use]
    pub fn published_at(&self) -> Option<NaiveDateTime> {
        parse_date(&self.date)
    }

    /// Publication year, if `date` can be parsed.
    #[must_use]
    pub fn year(&self) -> Option<i32> {
        use chrono::Datelike;

        self.published_at().map(|at| at.year())
    }
}

/// Parse the date formats the service is known to emit.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS` with or without an offset,
/// `YYYY-MM-DD`, `YYYY-MM` and a bare `YYYY`. Offsets are folded into UTC.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.naive_utc());
    }
    if let Ok(at) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%:z") {
        return Some(at.naive_utc());
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(at) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(at);
        }
    }
    if let Ok(day) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return day.and_hms_opt(0, 0, 0);
    }

    // Partial dates: "2020-06" and "2020"
    let mut parts = raw.splitn(2, '-');
    let year = parts.next().filter(|y| y.len() == 4)?.parse::<i32>().ok()?;
    let month = match parts.next() {
        Some(m) if m.len() == 2 => m.parse::<u32>().ok()?,
        Some(_) => return None,
        None => 1,
    };
    NaiveDate::from_ymd_opt(year, month, 1)?.and_hms_opt(0, 0, 0)
}
