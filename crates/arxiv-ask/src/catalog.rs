//! Filtering, sorting and year grouping of search results.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{Paper, SortBy, SortOrder};

/// How a result list should be narrowed and ordered for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultView {
    /// Earliest publication year to keep (inclusive).
    #[serde(default)]
    pub year_from: Option<i32>,

    /// Latest publication year to keep (inclusive).
    #[serde(default)]
    pub year_to: Option<i32>,

    /// Sort key.
    #[serde(default)]
    pub sort_by: SortBy,

    /// Sort direction (ignored for relevance).
    #[serde(default)]
    pub sort_order: SortOrder,
}

impl ResultView {
    /// Check if any year bound is set.
    #[must_use]
    pub const fn has_year_bounds(&self) -> bool {
        self.year_from.is_some() || self.year_to.is_some()
    }

    /// Whether `paper` passes the year bounds. Undated papers only pass when
    /// no bound is set.
    #[must_use]
    pub fn keeps(&self, paper: &Paper) -> bool {
        if !self.has_year_bounds() {
            return true;
        }
        paper.year().is_some_and(|year| {
            self.year_from.is_none_or(|from| year >= from)
                && self.year_to.is_none_or(|to| year <= to)
        })
    }

    /// Apply the bounds and ordering, leaving `papers` untouched.
    #[must_use]
    pub fn apply(&self, papers: &[Paper]) -> Vec<Paper> {
        let mut kept: Vec<Paper> = papers.iter().filter(|p| self.keeps(p)).cloned().collect();

        if self.sort_by == SortBy::Date {
            let order = self.sort_order;
            // Stable sort keeps source order among equal dates
            kept.sort_by_cached_key(|p| DateKey { at: p.published_at(), order });
        }

        kept
    }
}

#[derive(PartialEq, Eq)]
struct DateKey {
    at: Option<chrono::NaiveDateTime>,
    order: SortOrder,
}

impl Ord for DateKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.at, other.at) {
            (Some(a), Some(b)) => match self.order {
                SortOrder::Asc => a.cmp(&b),
                SortOrder::Desc => b.cmp(&a),
            },
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl PartialOrd for DateKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Papers published in the same year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearGroup {
    /// Publication year, `None` for papers without a parseable date.
    pub year: Option<i32>,

    /// Papers in their incoming order.
    pub papers: Vec<Paper>,
}

/// Group papers by publication year: newest year first, undated last.
#[must_use]
pub fn group_by_year(papers: &[Paper]) -> Vec<YearGroup> {
    let mut dated: BTreeMap<i32, Vec<Paper>> = BTreeMap::new();
    let mut undated = Vec::new();

    for paper in papers {
        match paper.year() {
            Some(year) => dated.entry(year).or_default().push(paper.clone()),
            None => undated.push(paper.clone()),
        }
    }

    let mut groups: Vec<YearGroup> = dated
        .into_iter()
        .rev()
        .map(|(year, papers)| YearGroup { year: Some(year), papers })
        .collect();

    if !undated.is_empty() {
        groups.push(YearGroup { year: None, papers: undated });
    }

    groups
}
