//! Fail-soft paper search.
//!
//! [`PaperSearch::search_papers`] is the only entry point the rendering layer
//! needs: it always returns a (possibly empty) list and never an error.

use std::sync::Arc;

use serde_json::Value;

use crate::error::ClientResult;
use crate::models::Paper;
use crate::normalize::normalize_response;

/// Anything that can answer a search query with a raw JSON response.
#[async_trait::async_trait]
pub trait PaperSource: Send + Sync {
    /// Fetch the raw response for `query`.
    async fn ask(&self, query: &str) -> ClientResult<Value>;
}

/// Search facade over a [`PaperSource`].
#[derive(Clone)]
pub struct PaperSearch {
    source: Arc<dyn PaperSource>,
}

impl PaperSearch {
    /// Create a search facade.
    #[must_use]
    pub fn new(source: Arc<dyn PaperSource>) -> Self {
        Self { source }
    }

    /// Search for papers and normalize whatever shape comes back.
    ///
    /// Blank queries return `[]` without contacting the source. Transport
    /// failures and non-success statuses are logged and also yield `[]`.
    pub async fn search_papers(&self, query: &str) -> Vec<Paper> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        match self.source.ask(query).await {
            Ok(raw) => {
                let papers = normalize_response(&raw);
                tracing::info!(query, results = papers.len(), "search complete");
                papers
            }
            Err(err) => {
                tracing::error!(
                    query,
                    status = ?err.status(),
                    body = err.body().unwrap_or_default(),
                    error = %err,
                    "search request failed"
                );
                Vec::new()
            }
        }
    }
}

impl std::fmt::Debug for PaperSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaperSearch").finish_non_exhaustive()
    }
}
