//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`ListingError`] - Failures while assembling a directory listing
//! - [`ConfigError`] - Invalid page settings

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, DNS, offline, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

/// Errors that abort a browse action. None of them are retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// Response is not a well-formed listing document
    #[error("Malformed listing response: {0}")]
    Parse(String),
    /// The store answered with an `<Error>` document
    #[error("{code}: {message}")]
    Store { code: String, message: String },
    /// Truncated page that carries neither a marker nor any key
    #[error("Listing is truncated but has no continuation marker")]
    MissingMarker,
    /// The store returned the marker it was just given
    #[error("Listing did not advance past marker '{0}'")]
    StalledMarker(String),
    /// A later page echoed a different prefix than the first one
    #[error("Listing prefix changed from '{expected}' to '{found}'")]
    PrefixChanged { expected: String, found: String },
    /// A newer browse action replaced this one before it finished
    #[error("Listing superseded by a newer browse action")]
    Superseded,
}

/// Invalid page settings. Resolution logs these and falls back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown sort mode '{0}'")]
    UnknownSortMode(String),
}
