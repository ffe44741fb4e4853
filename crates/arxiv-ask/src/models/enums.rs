//! Enumeration types for result views and CLI output.

use serde::{Deserialize, Serialize};

/// Output format for rendered results.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// Human-readable Markdown format.
    #[default]
    Markdown,
    /// Machine-readable JSON format.
    Json,
}

impl ResponseFormat {
    /// Check if this is JSON format.
    #[must_use]
    pub const fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Key used to order search results.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Publication date parsed from the record's `date`.
    #[default]
    Date,
    /// Order in which the service returned the papers.
    Relevance,
}

/// Sort direction.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest first.
    Asc,
    /// Newest first.
    #[default]
    Desc,
}

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The person asking questions.
    User,
    /// The service's answer.
    Bot,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_result_view() {
        assert_eq!(SortBy::default(), SortBy::Date);
        assert_eq!(SortOrder::default(), SortOrder::Desc);
        assert_eq!(ResponseFormat::default(), ResponseFormat::Markdown);
        assert!(ResponseFormat::Json.is_json());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_value(SortBy::Relevance).unwrap(), "relevance");
        assert_eq!(serde_json::to_value(Sender::Bot).unwrap(), "bot");
        let order: SortOrder = serde_json::from_str("\"asc\"").unwrap();
        assert_eq!(order, SortOrder::Asc);
    }
}
