//! arxiv-ask
//!
//! Client for an "ask a question about papers" service whose search
//! responses come back in several incompatible JSON shapes, and the engine
//! that reconciles them into one canonical [`Paper`] record.
//!
//! # Features
//!
//! - **Shape-agnostic**: flat arrays of paper objects, keyed answer maps and
//!   bare URL lists all normalize to the same record
//! - **Fail-soft**: searches never error; bad data degrades to empty fields
//! - **Chat**: follow-up questions about a selected paper
//! - **Views**: year filtering, date sorting and year grouping
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use arxiv_ask::{AskClient, Config, PaperSearch};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = AskClient::new(Config::from_env()?)?;
//!     let search = PaperSearch::new(Arc::new(client));
//!
//!     for paper in search.search_papers("diffusion models for audio").await {
//!         println!("{} ({})", paper.title, paper.identifier);
//!     }
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod chat;
pub mod client;
pub mod config;
pub mod error;
pub mod formatters;
pub mod models;
pub mod normalize;
pub mod search;

pub use catalog::{ResultView, YearGroup, group_by_year};
pub use chat::ChatSession;
pub use client::AskClient;
pub use config::Config;
pub use error::{ClientError, ClientResult, IdentifierError};
pub use models::Paper;
pub use normalize::normalize_response;
pub use search::{PaperSearch, PaperSource};
