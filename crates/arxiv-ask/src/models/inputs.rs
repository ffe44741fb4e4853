//! Request and response payloads exchanged with the ask-about-papers service.

use serde::{Deserialize, Serialize};

use super::{Paper, Sender};

/// Body of `POST /ask`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    /// Free-text search question.
    pub query: String,
}

impl AskRequest {
    /// Create a search request.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self { query: query.into() }
    }
}

/// Body of `POST /question`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRequest {
    /// The question about the selected paper.
    pub query: String,

    /// Identifier the service uses to key its per-paper index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper_id: Option<String>,

    /// PDF the service should index when it has not seen the paper yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_link: Option<String>,
}

impl QuestionRequest {
    /// Build a question, attaching the paper's identifier and PDF link when known.
    #[must_use]
    pub fn about(query: impl Into<String>, paper: Option<&Paper>) -> Self {
        let paper = paper.filter(|p| p.has_identifier());
        Self {
            query: query.into(),
            paper_id: paper.map(|p| p.identifier.clone()),
            pdf_link: paper.and_then(Paper::pdf_url),
        }
    }
}

/// Response of `POST /question`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResponse {
    /// Markdown answer text.
    pub response: String,
}

/// One line of a chat transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Author of the message.
    pub sender: Sender,

    /// Message text (Markdown for bot replies).
    pub text: String,
}

impl ChatMessage {
    /// Create a user message.
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self { sender: Sender::User, text: text.into() }
    }

    /// Create a bot message.
    #[must_use]
    pub fn bot(text: impl Into<String>) -> Self {
        Self { sender: Sender::Bot, text: text.into() }
    }
}
