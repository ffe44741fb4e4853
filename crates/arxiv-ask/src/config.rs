//! Configuration for the arxiv-ask client.

use std::time::Duration;

use anyhow::Context;

/// Service configuration constants.
pub mod api {
    use std::time::Duration;

    /// Base URL of the local ask-about-papers service.
    pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

    /// Endpoint returning paper search results in one of several shapes.
    pub const ASK_PATH: &str = "ask";

    /// Endpoint answering a question about a single paper.
    pub const QUESTION_PATH: &str = "question";

    /// Request timeout (the service runs an LLM tool call per search).
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Retries for transient failures. The service contract has none.
    pub const MAX_RETRIES: u32 = 0;

    /// Cache TTL (5 minutes).
    pub const CACHE_TTL: Duration = Duration::from_secs(300);

    /// Maximum cache size.
    pub const CACHE_MAX_SIZE: u64 = 256;

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 4;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);
}

/// arXiv link templates used when rendering records.
pub mod links {
    /// PDF download prefix; the identifier and `.pdf` are appended.
    pub const PDF_PREFIX: &str = "https://arxiv.org/pdf/";

    /// Abstract page prefix.
    pub const ABS_PREFIX: &str = "https://arxiv.org/abs/";
}

/// Environment variable naming the service base URL.
pub const BASE_URL_ENV: &str = "ARXIV_ASK_BASE_URL";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the ask-about-papers service.
    pub base_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Retries for transient transport failures.
    pub max_retries: u32,

    /// Cache TTL for search responses.
    pub cache_ttl: Duration,

    /// Maximum cached search responses (0 disables caching).
    pub cache_max_size: u64,
}

impl Config {
    /// Create a configuration pointing at `base_url` with default limits.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            max_retries: api::MAX_RETRIES,
            cache_ttl: api::CACHE_TTL,
            cache_max_size: api::CACHE_MAX_SIZE,
        }
    }

    /// Create a test configuration with a custom URL for mock servers.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            max_retries: 0,
            cache_ttl: Duration::from_secs(0), // No caching in tests
            cache_max_size: 0,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns error if `ARXIV_ASK_BASE_URL` is set but is not an absolute URL.
    pub fn from_env() -> anyhow::Result<Self> {
        match std::env::var(BASE_URL_ENV) {
            Ok(base_url) => {
                Self::validate_base_url(&base_url)?;
                Ok(Self::new(base_url))
            }
            Err(_) => Ok(Self::default()),
        }
    }

    /// Check that a base URL parses as an absolute http(s) URL.
    ///
    /// # Errors
    ///
    /// Returns error describing why the URL was rejected.
    pub fn validate_base_url(base_url: &str) -> anyhow::Result<url::Url> {
        let parsed = url::Url::parse(base_url)
            .with_context(|| format!("invalid service base URL {base_url:?}"))?;
        anyhow::ensure!(
            matches!(parsed.scheme(), "http" | "https"),
            "service base URL must use http or https, got {:?}",
            parsed.scheme()
        );
        Ok(parsed)
    }

    /// Check if response caching is enabled.
    #[must_use]
    pub const fn caching_enabled(&self) -> bool {
        self.cache_max_size > 0
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(api::DEFAULT_BASE_URL)
    }
}
