//! HTTP client for the ask-about-papers service.
//!
//! Provides async HTTP client with:
//! - Connection pooling via reqwest
//! - Optional retry middleware with exponential backoff (off by default)
//! - Search response caching keyed by query

use std::time::Duration;

use md5::{Digest, Md5};
use moka::future::Cache;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use serde_json::Value;

use crate::chat::QuestionSource;
use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::{AskRequest, QuestionRequest, QuestionResponse};
use crate::search::PaperSource;

/// Client for the `/ask` and `/question` endpoints.
#[derive(Clone)]
pub struct AskClient {
    /// HTTP client with middleware.
    client: ClientWithMiddleware,

    /// Raw `/ask` responses, when caching is enabled.
    cache: Option<Cache<String, Value>>,

    /// `{base_url}/ask`
    ask_url: url::Url,

    /// `{base_url}/question`
    question_url: url::Url,

    /// Request timeout, reported on timeouts.
    request_timeout: Duration,
}

impl AskClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is invalid or HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let base = Config::validate_base_url(&with_trailing_slash(&config.base_url))?;
        let ask_url = base.join(api::ASK_PATH)?;
        let question_url = base.join(api::QUESTION_PATH)?;

        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        let retry_policy = ExponentialBackoff::builder()
            .retry_bounds(Duration::from_millis(500), Duration::from_secs(10))
            .build_with_max_retries(config.max_retries);

        let client = ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        let cache = config.caching_enabled().then(|| {
            Cache::builder()
                .max_capacity(config.cache_max_size)
                .time_to_live(config.cache_ttl)
                .build()
        });

        Ok(Self { client, cache, ask_url, question_url, request_timeout: config.request_timeout })
    }

    /// URL of the search endpoint.
    #[must_use]
    pub fn ask_url(&self) -> &str {
        self.ask_url.as_str()
    }

    /// URL of the question endpoint.
    #[must_use]
    pub fn question_url(&self) -> &str {
        self.question_url.as_str()
    }

    /// Send a search query and return the raw, unnormalized response body.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status or a non-JSON body.
    pub async fn ask(&self, query: &str) -> ClientResult<Value> {
        let cache_key = cache_key("POST", self.ask_url.as_str(), query);
        if let Some(cache) = &self.cache {
            if let Some(cached) = cache.get(&cache_key).await {
                tracing::debug!(query, "serving search from cache");
                return Ok(cached);
            }
        }

        let value: Value = self.post(&self.ask_url, &AskRequest::new(query)).await?;

        if let Some(cache) = &self.cache {
            cache.insert(cache_key, value.clone()).await;
        }

        Ok(value)
    }

    /// Ask a question about a paper.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status or an unexpected body.
    pub async fn question(&self, request: &QuestionRequest) -> ClientResult<QuestionResponse> {
        self.post(&self.question_url, request).await
    }

    /// Make a JSON POST request.
    async fn post<B, T>(&self, url: &url::Url, body: &B) -> ClientResult<T>
    where
        B: serde::Serialize + Sync,
        T: serde::de::DeserializeOwned,
    {
        let body_str = serde_json::to_string(body)?;

        let response = self
            .client
            .post(url.as_str())
            .header("Content-Type", "application/json")
            .body(body_str)
            .send()
            .await
            .map_err(|err| self.transport_error(err))?;

        let response = Self::handle_response(response).await?;
        let text = response.text().await?;

        serde_json::from_str(&text).map_err(ClientError::from)
    }

    fn transport_error(&self, err: reqwest_middleware::Error) -> ClientError {
        match err {
            reqwest_middleware::Error::Reqwest(inner) if inner.is_timeout() => {
                ClientError::Timeout(self.request_timeout)
            }
            other => ClientError::from(other),
        }
    }

    /// Handle service response status codes.
    async fn handle_response(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        match status.as_u16() {
            404 => Err(ClientError::not_found(text)),
            400 | 422 => Err(ClientError::bad_request(text)),
            500..=599 => Err(ClientError::server(status.as_u16(), text)),
            _ => Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text }),
        }
    }
}

fn with_trailing_slash(base_url: &str) -> String {
    if base_url.ends_with('/') { base_url.to_string() } else { format!("{base_url}/") }
}

/// Generate cache key.
fn cache_key(method: &str, url: &str, query: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(method.as_bytes());
    hasher.update(b"|");
    hasher.update(url.as_bytes());
    hasher.update(b"|");
    hasher.update(query.as_bytes());

    format!("{:x}", hasher.finalize())
}

#[async_trait::async_trait]
impl PaperSource for AskClient {
    async fn ask(&self, query: &str) -> ClientResult<Value> {
        Self::ask(self, query).await
    }
}

#[async_trait::async_trait]
impl QuestionSource for AskClient {
    async fn question(&self, request: &QuestionRequest) -> ClientResult<QuestionResponse> {
        Self::question(self, request).await
    }
}

impl std::fmt::Debug for AskClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AskClient")
            .field("ask_url", &self.ask_url.as_str())
            .field("caching", &self.cache.is_some())
            .finish()
    }
}
