//! Markdown output formatting.

use std::borrow::Cow;

use crate::catalog::YearGroup;
use crate::models::Paper;

/// Characters of summary shown per paper.
const SUMMARY_PREVIEW_CHARS: usize = 300;

/// Format a list of papers as Markdown.
#[must_use]
pub fn format_papers_markdown(papers: &[Paper]) -> String {
    if papers.is_empty() {
        return "No papers found.".to_string();
    }

    let mut output = format!("# Papers ({} results)\n\n", papers.len());

    for (i, paper) in papers.iter().enumerate() {
        output.push_str(&format_paper_markdown(paper, i + 1));
        output.push_str("\n---\n\n");
    }

    output
}

/// Format year groups as Markdown, one section per year.
#[must_use]
pub fn format_groups_markdown(groups: &[YearGroup]) -> String {
    let total: usize = groups.iter().map(|g| g.papers.len()).sum();
    if total == 0 {
        return "No papers found.".to_string();
    }

    let mut output = format!("# Papers ({total} results)\n\n");
    let mut index = 1;

    for group in groups {
        match group.year {
            Some(year) => output.push_str(&format!("## {year}\n\n")),
            None => output.push_str("## Undated\n\n"),
        }
        for paper in &group.papers {
            output.push_str(&format!("#{}", format_paper_markdown(paper, index)));
            output.push_str("\n---\n\n");
            index += 1;
        }
    }

    output
}

/// Format a single paper as Markdown.
#[must_use]
pub fn format_paper_markdown(paper: &Paper, index: usize) -> String {
    let mut output = String::new();

    // Title
    output.push_str(&format!("## {}. {}\n\n", index, paper.title));

    // Authors
    if !paper.authors.is_empty() {
        output.push_str(&format!("**Authors**: {}\n\n", paper.author_names()));
    }

    // Date and category
    let mut meta = Vec::new();
    if !paper.date.is_empty() {
        meta.push(format!("**Published**: {}", paper.date));
    }
    if !paper.category.is_empty() {
        meta.push(format!("**Category**: {}", paper.category));
    }
    if !meta.is_empty() {
        output.push_str(&format!("{}\n\n", meta.join(" | ")));
    }

    // Links
    if let (Some(abs), Some(pdf)) = (paper.abs_url(), paper.pdf_url()) {
        output.push_str(&format!(
            "**arXiv**: [{}]({abs}) | [PDF]({pdf})\n\n",
            paper.identifier
        ));
    }

    // Summary (truncated)
    if !paper.summary.is_empty() {
        let summary = paper.summary.trim();
        let truncated: Cow<'_, str> = match summary.char_indices().nth(SUMMARY_PREVIEW_CHARS) {
            Some((cut, _)) => Cow::Owned(format!("{}...", &summary[..cut])),
            None => Cow::Borrowed(summary),
        };
        output.push_str(&format!("**Summary**: {truncated}\n"));
    }

    output
}
