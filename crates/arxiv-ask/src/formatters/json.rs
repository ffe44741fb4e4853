//! JSON output formatting.

use serde_json::{Value, json};

use crate::catalog::YearGroup;
use crate::models::Paper;

/// Serialize papers as a JSON array of canonical records.
#[must_use]
pub fn papers_json(papers: &[Paper]) -> Value {
    Value::Array(papers.iter().map(paper_json).collect())
}

/// Serialize one paper, adding its arXiv links when an identifier is known.
#[must_use]
pub fn paper_json(paper: &Paper) -> Value {
    let mut obj = json!({
        "title": paper.title,
        "authors": paper.authors,
        "summary": paper.summary,
        "arxivId": paper.identifier,
        "date": paper.date,
        "category": paper.category,
    });

    if let Some(pdf) = paper.pdf_url() {
        obj["pdf"] = json!(pdf);
    }

    obj
}

/// Serialize year groups as `[{"year": 2021, "papers": [...]}, ...]`.
#[must_use]
pub fn groups_json(groups: &[YearGroup]) -> Value {
    Value::Array(
        groups
            .iter()
            .map(|group| json!({"year": group.year, "papers": papers_json(&group.papers)}))
            .collect(),
    )
}
