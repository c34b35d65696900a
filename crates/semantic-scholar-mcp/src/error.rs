//! Error types for the Semantic Scholar MCP server.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use std::time::Duration;

use serde::Serialize;
use serde_json::json;

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Non-success HTTP status from the Semantic Scholar API.
    #[error("Upstream returned status {status}: {message}")]
    Upstream {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
        /// Value of `Retry-After`, when the API sent one
        retry_after: Option<Duration>,
    },

    /// Response body was not valid JSON or had the wrong shape
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// Create an upstream error without retry hint.
    #[must_use]
    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        Self::Upstream { status, message: message.into(), retry_after: None }
    }

    /// Upstream HTTP status, if this error came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true for a 429 response.
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        matches!(self, Self::Upstream { status: 429, .. })
    }

    /// Returns true for a 404 response.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Upstream { status: 404, .. })
    }

    /// Get the retry-after duration if the API sent one.
    #[must_use]
    pub const fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::Upstream { retry_after, .. } => *retry_after,
            _ => None,
        }
    }
}

/// Error categories reported to tool callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed or missing argument.
    InvalidArgument,
    /// Non-2xx response from the API.
    UpstreamError,
    /// Outbound call exceeded its time bound.
    Timeout,
    /// Response body could not be decoded.
    DecodeError,
    /// Connection-level failure before any response.
    TransportError,
}

/// Errors from MCP tool execution.
#[derive(thiserror::Error, Debug)]
pub enum ToolError {
    /// Error from the API client
    #[error("API error: {0}")]
    Client(#[from] ClientError),

    /// A per-paper lookup returned 404
    #[error("Paper not found: {paper_id}")]
    PaperNotFound {
        /// Identifier as the caller supplied it
        paper_id: String,
        /// The 404 response
        source: ClientError,
    },

    /// Argument validation failed
    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument {
        /// Argument that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// JSON serialization error while rendering a result
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ToolError {
    /// Create an invalid argument error.
    #[must_use]
    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument { field: field.into(), message: message.into() }
    }

    /// Category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::PaperNotFound { .. } => ErrorKind::UpstreamError,
            Self::Client(ClientError::Upstream { .. }) => ErrorKind::UpstreamError,
            Self::Client(ClientError::Timeout(_)) => ErrorKind::Timeout,
            Self::Client(ClientError::Decode(_)) => ErrorKind::DecodeError,
            Self::Client(ClientError::Http(_)) => ErrorKind::TransportError,
            Self::Serialization(_) => ErrorKind::DecodeError,
        }
    }

    /// The underlying client failure, if any.
    #[must_use]
    pub const fn client_error(&self) -> Option<&ClientError> {
        match self {
            Self::Client(err) | Self::PaperNotFound { source: err, .. } => Some(err),
            Self::InvalidArgument { .. } | Self::Serialization(_) => None,
        }
    }

    /// Convert to a user-friendly error message for MCP response.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::Client(err @ ClientError::Upstream { .. }) if err.is_rate_limited() => {
                match err.retry_after() {
                    Some(wait) => format!(
                        "Rate limited by Semantic Scholar API. Please wait {wait:?} before retrying."
                    ),
                    None => "Rate limited by Semantic Scholar API. Please retry later.".to_string(),
                }
            }
            Self::Client(err) if err.is_not_found() => {
                "Not found. Please check the ID is correct.".to_string()
            }
            _ => self.to_string(),
        }
    }

    /// Structured failure payload returned to the tool caller.
    #[must_use]
    pub fn to_payload(&self) -> serde_json::Value {
        let mut error = json!({
            "kind": self.kind(),
            "message": self.to_user_message(),
        });

        if let Some(ClientError::Upstream { status, message, retry_after }) = self.client_error() {
            error["status"] = json!(status);
            error["body"] = json!(message);
            if let Some(wait) = retry_after {
                error["retryAfterSecs"] = json!(wait.as_secs());
            }
        }
        if let Self::InvalidArgument { field, .. } = self {
            error["field"] = json!(field);
        }

        json!({ "error": error })
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;
