//! Error types for repository search.

use thiserror::Error;

/// Errors that can occur while searching repositories.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Failed to build the HTTP client
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The configured base URL does not form a valid endpoint
    #[error("Invalid search URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// Transport failure or timeout
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("Search API error: {status} - {message}")]
    Status { status: u16, message: String },

    /// The response body was not a search envelope
    #[error("Failed to decode search response: {0}")]
    Decode(#[from] serde_json::Error),
}
