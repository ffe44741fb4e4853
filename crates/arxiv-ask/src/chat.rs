//! Question-and-answer conversation about a selected paper.

use std::sync::Arc;

use uuid::Uuid;

use crate::error::ClientResult;
use crate::models::{ChatMessage, Paper, QuestionRequest, QuestionResponse};

/// First bot message of every session.
pub const GREETING: &str =
    "Hello! How can I assist you today? Select a paper to ask questions about it.";

/// Bot message appended when the service could not answer.
pub const ERROR_REPLY: &str = "Error encountered. Please try again.";

/// Anything that can answer a question about a paper.
#[async_trait::async_trait]
pub trait QuestionSource: Send + Sync {
    /// Send the question and return the service's answer.
    async fn question(&self, request: &QuestionRequest) -> ClientResult<QuestionResponse>;
}

/// A chat transcript bound to at most one selected paper.
pub struct ChatSession {
    id: Uuid,
    source: Arc<dyn QuestionSource>,
    paper: Option<Paper>,
    history: Vec<ChatMessage>,
}

impl ChatSession {
    /// Start a session with the greeting message.
    #[must_use]
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self {
            id: Uuid::new_v4(),
            source,
            paper: None,
            history: vec![ChatMessage::bot(GREETING)],
        }
    }

    /// Session id, used to correlate log lines.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Currently selected paper.
    #[must_use]
    pub const fn paper(&self) -> Option<&Paper> {
        self.paper.as_ref()
    }

    /// Transcript so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Focus the conversation on `paper`, restarting the transcript.
    pub fn select_paper(&mut self, paper: Paper) {
        tracing::debug!(session = %self.id, paper = %paper.identifier, "paper selected");
        self.history = vec![ChatMessage::bot(format!(
            "You've selected \"{}\". What would you like to know?",
            paper.title
        ))];
        self.paper = Some(paper);
    }

    /// Drop the selected paper. The transcript is kept.
    pub fn close(&mut self) {
        self.paper = None;
    }

    /// Ask a question and append both sides to the transcript.
    ///
    /// Blank messages are ignored and return `None`. Service failures are
    /// logged and answered with [`ERROR_REPLY`].
    pub async fn send(&mut self, message: &str) -> Option<&ChatMessage> {
        let message = message.trim();
        if message.is_empty() {
            return None;
        }

        self.history.push(ChatMessage::user(message));
        let request = QuestionRequest::about(message, self.paper.as_ref());

        let reply = match self.source.question(&request).await {
            Ok(answer) => ChatMessage::bot(answer.response),
            Err(err) => {
                tracing::error!(
                    session = %self.id,
                    paper_id = request.paper_id.as_deref().unwrap_or_default(),
                    error = %err,
                    "question request failed"
                );
                ChatMessage::bot(ERROR_REPLY)
            }
        };

        self.history.push(reply);
        self.history.last()
    }
}

impl std::fmt::Debug for ChatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSession")
            .field("id", &self.id)
            .field("paper", &self.paper.as_ref().map(|p| p.identifier.as_str()))
            .field("messages", &self.history.len())
            .finish()
    }
}
