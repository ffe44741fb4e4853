//! Data models for the ask-about-papers service.
//!
//! [`Paper`] is the canonical record every response shape is normalized into.
//! Wire payloads use `camelCase` to match the service's request schema.

mod enums;
mod inputs;
mod paper;

pub use enums::{ResponseFormat, Sender, SortBy, SortOrder};
pub use inputs::{AskRequest, ChatMessage, QuestionRequest, QuestionResponse};
pub use paper::{Paper, parse_date};
