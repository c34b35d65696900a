//! Semantic Scholar API client.
//!
//! Provides an async HTTP client with:
//! - Connection pooling via reqwest
//! - A bounded per-request timeout
//! - Typed mapping of non-2xx statuses, timeouts and undecodable bodies
//!
//! Each call performs exactly one request. Nothing is retried or cached; a 429
//! is reported to the caller together with the API's `Retry-After` hint.
//!
//! Responses are returned as [`ApiResponse`]: the typed view for reading
//! values, plus the body exactly as received so `null` members and fields
//! without a typed counterpart reach the caller unchanged.

use std::time::{Duration, Instant};

use reqwest::Client;
use serde_json::Value;

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::{AuthorsPage, Paper, SearchResult};

/// A decoded response body.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// Typed view of the body.
    pub decoded: T,

    /// The body as the API sent it.
    pub body: Value,
}

/// Semantic Scholar API client.
#[derive(Clone)]
pub struct SemanticScholarClient {
    /// HTTP client with default headers.
    client: Client,

    /// API key (optional).
    api_key: Option<String>,

    /// Graph API base URL.
    graph_api_url: String,

    /// Per-request timeout, reported back on expiry.
    request_timeout: Duration,
}

impl SemanticScholarClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the API key is not a valid header value or the HTTP
    /// client cannot be built.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        if let Some(ref key) = config.api_key {
            let mut value = reqwest::header::HeaderValue::from_str(key.trim())?;
            value.set_sensitive(true);
            headers.insert(api::API_KEY_HEADER, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(concat!("semantic-scholar-mcp/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key,
            graph_api_url: config.graph_api_url,
            request_timeout: config.request_timeout,
        })
    }

    /// Check if an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Search for papers by relevance.
    ///
    /// `filters` are passed through as extra query parameters.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn search_papers(
        &self,
        query: &str,
        fields: &str,
        offset: u32,
        limit: u32,
        filters: &[(String, String)],
    ) -> ClientResult<ApiResponse<SearchResult>> {
        let url = format!("{}/paper/search", self.graph_api_url);

        let mut params = vec![
            ("query".to_string(), query.to_string()),
            ("fields".to_string(), fields.to_string()),
            ("offset".to_string(), offset.to_string()),
            ("limit".to_string(), limit.to_string()),
        ];
        params.extend(filters.iter().cloned());

        self.get(&url, &params).await
    }

    /// Get a single paper by ID.
    ///
    /// The ID is passed through verbatim; the API resolves `DOI:`, `ARXIV:`
    /// and the other prefixes.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_paper(&self, paper_id: &str, fields: &str) -> ClientResult<ApiResponse<Paper>> {
        let url = format!("{}/paper/{}", self.graph_api_url, paper_id);
        let params = vec![("fields".to_string(), fields.to_string())];

        self.get(&url, &params).await
    }

    /// Get one page of a paper's authors.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_paper_authors(
        &self,
        paper_id: &str,
        fields: &str,
        offset: u32,
        limit: u32,
    ) -> ClientResult<ApiResponse<AuthorsPage>> {
        let url = format!("{}/paper/{}/authors", self.graph_api_url, paper_id);
        let params = vec![
            ("fields".to_string(), fields.to_string()),
            ("offset".to_string(), offset.to_string()),
            ("limit".to_string(), limit.to_string()),
        ];

        self.get(&url, &params).await
    }

    /// Make a GET request and decode the JSON body.
    ///
    /// The body must be JSON and must also fit `T`; either failure is a
    /// decode error.
    async fn get<T>(&self, url: &str, params: &[(String, String)]) -> ClientResult<ApiResponse<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let started = Instant::now();
        tracing::debug!(url, "GET");

        let response =
            self.client.get(url).query(params).send().await.map_err(|e| self.transport_error(e))?;

        let status = response.status();
        tracing::debug!(
            url,
            status = status.as_u16(),
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "Response received"
        );

        let response = self.handle_response(response).await?;
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        let decode_error = |e: serde_json::Error| {
            tracing::warn!(url, error = %e, "Undecodable response body");
            ClientError::from(e)
        };

        let body: Value = serde_json::from_str(&body).map_err(decode_error)?;
        let decoded = T::deserialize(&body).map_err(decode_error)?;

        Ok(ApiResponse { decoded, body })
    }

    /// Handle API response status codes.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let retry_after = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse().ok())
            .map(Duration::from_secs);

        let message = response.text().await.unwrap_or_default();

        tracing::warn!(status = status.as_u16(), ?retry_after, "Semantic Scholar API error");

        Err(ClientError::Upstream { status: status.as_u16(), message, retry_after })
    }

    /// Classify a reqwest failure.
    fn transport_error(&self, err: reqwest::Error) -> ClientError {
        if err.is_timeout() {
            tracing::warn!(timeout = ?self.request_timeout, "Request timed out");
            ClientError::Timeout(self.request_timeout)
        } else {
            ClientError::Http(err)
        }
    }
}

impl std::fmt::Debug for SemanticScholarClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SemanticScholarClient")
            .field("has_api_key", &self.has_api_key())
            .field("graph_api_url", &self.graph_api_url)
            .finish()
    }
}
