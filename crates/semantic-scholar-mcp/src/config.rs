//! Configuration for the Semantic Scholar MCP server.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Graph API endpoint.
    pub const GRAPH_API: &str = "https://api.semanticscholar.org/graph/v1";

    /// Header carrying the API key.
    pub const API_KEY_HEADER: &str = "x-api-key";

    /// Environment variable holding the API key.
    pub const API_KEY_ENV: &str = "SEMANTIC_SCHOLAR_API_KEY";

    /// Request timeout for a single upstream call.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Maximum page size accepted by `/paper/search`.
    pub const MAX_SEARCH_LIMIT: u32 = 100;

    /// Maximum page size accepted by `/paper/{id}/authors`.
    pub const MAX_AUTHORS_LIMIT: u32 = 1000;
}

/// Field sets for API requests.
pub mod fields {
    /// Default paper fields when the caller selects none.
    pub const PAPER_DEFAULT: &[&str] =
        &["paperId", "title", "abstract", "authors", "year", "citationCount"];

    /// Default author fields when the caller selects none.
    pub const AUTHOR_DEFAULT: &[&str] =
        &["authorId", "name", "affiliations", "citationCount", "hIndex"];

    /// Fields needed to render a citation locally.
    pub const CITATION: &[&str] =
        &["paperId", "title", "authors", "year", "venue", "journal", "externalIds", "url"];
}

/// Server configuration.
#[derive(Clone)]
pub struct Config {
    /// Semantic Scholar API key (optional).
    pub api_key: Option<String>,

    /// Base URL for Graph API (for testing with mock servers).
    pub graph_api_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create a new configuration with optional API key.
    ///
    /// Blank keys are treated as absent.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            graph_api_url: api::GRAPH_API.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
        }
    }

    /// Create a test configuration with custom URLs for mock servers.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_key: None,
            graph_api_url: format!("{}/graph/v1", base_url.trim_end_matches('/')),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns error if the API key is not valid unicode.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = match std::env::var(api::API_KEY_ENV) {
            Ok(key) => Some(key),
            Err(std::env::VarError::NotPresent) => None,
            Err(e) => return Err(anyhow::anyhow!("{}: {e}", api::API_KEY_ENV)),
        };
        Ok(Self::new(api_key))
    }

    /// Override the Graph API base URL.
    ///
    /// # Errors
    ///
    /// Returns error if the URL does not parse or is not http(s).
    pub fn with_graph_api_url(mut self, url: &str) -> anyhow::Result<Self> {
        let parsed = url::Url::parse(url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            anyhow::bail!("unsupported URL scheme: {}", parsed.scheme());
        }
        self.graph_api_url = url.trim_end_matches('/').to_string();
        Ok(self)
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("has_api_key", &self.has_api_key())
            .field("graph_api_url", &self.graph_api_url)
            .field("request_timeout", &self.request_timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}
