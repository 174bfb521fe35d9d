//! Error types for the suggestion service client.

use thiserror::Error;

/// Result type alias for suggestion service operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from the suggestion service collaborator.
///
/// These never cross the provider boundary: `SuggestionProvider::suggest`
/// degrades every fault to an empty suggestion list.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed (includes timeouts)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON deserialization failed
    #[error("Failed to parse JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// No API key configured
    #[error("No API key configured for the suggestion service")]
    MissingApiKey,

    /// Service replied with a non-success status
    #[error("Suggestion service returned status {0}")]
    BadStatus(reqwest::StatusCode),

    /// Service reply carried no usable content
    #[error("Suggestion service returned an empty response")]
    EmptyResponse,
}
