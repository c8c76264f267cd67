//! Error types for icon generation.

use std::time::Duration;

/// Maximum number of characters kept from an API error body.
const MAX_ERROR_MESSAGE_LEN: usize = 500;

/// Errors that can occur while generating an icon set.
#[derive(Debug, thiserror::Error)]
pub enum GenIconError {
    /// Missing credential or invalid settings.
    #[error("configuration error: {0}")]
    Config(String),

    /// API returned a non-success status other than 429.
    #[error("API error: {status} - {message}")]
    Transport {
        /// HTTP status code.
        status: u16,
        /// Sanitized response body.
        message: String,
    },

    /// A single request was rate limited (HTTP 429).
    #[error("rate limited, retry after {retry_after:?}")]
    RateLimited {
        /// Server's `Retry-After` hint.
        retry_after: Option<Duration>,
    },

    /// Rate limiting persisted past the attempt budget.
    #[error("max retries exceeded: still rate limited after {attempts} attempts")]
    RetryExhausted {
        /// Number of requests that were made.
        attempts: u32,
    },

    /// Response was well-formed but contained no image part.
    #[error("no image in response: {0}")]
    MissingContent(String),

    /// Invalid request parameters.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Prompt was rejected by the API's safety filters.
    #[error("content blocked: {0}")]
    ContentBlocked(String),

    /// Network or HTTP error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Failed to decode base64 data or recognize image bytes.
    #[error("failed to decode: {0}")]
    Decode(String),

    /// Image decoding, processing or encoding failed.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error (e.g., reading the key file or writing icons).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GenIconError {
    /// Returns true if this error is worth another attempt.
    ///
    /// Only rate limiting is treated as transient; every other failure is
    /// terminal for the run.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }

    /// Returns the server's retry hint, if one was given.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RateLimited { retry_after } => *retry_after,
            _ => None,
        }
    }
}

/// Result type alias for icon generation operations.
pub type Result<T> = std::result::Result<T, GenIconError>;

/// Parses a `Retry-After` header given in whole seconds.
pub(crate) fn parse_retry_after(headers: &reqwest::header::HeaderMap) -> Option<u64> {
    headers
        .get(reqwest::header::RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

/// Collapses whitespace and truncates an API error body for display.
pub(crate) fn sanitize_error_message(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= MAX_ERROR_MESSAGE_LEN {
        return collapsed;
    }
    let truncated: String = collapsed.chars().take(MAX_ERROR_MESSAGE_LEN).collect();
    format!("{truncated}...")
}
