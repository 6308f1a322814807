//! Error types for movie search and lookup.

use thiserror::Error;

/// Errors that can occur while searching or looking up titles.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MovieSearchError {
    /// The search term was empty after trimming.
    #[error("Search term is empty")]
    EmptyQuery,

    /// No OMDb API key has been configured.
    #[error("OMDb API key is not configured")]
    MissingApiKey,

    /// The API answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    HttpStatus {
        /// HTTP status code returned by the API
        status: u16,
    },

    /// Network communication error occurred.
    #[error("Network error: {reason}")]
    Network {
        /// The reason for the network error
        reason: String,
    },

    /// Failed to parse the response body.
    #[error("Parse error: {reason}")]
    Parse {
        /// The reason for the parse error
        reason: String,
    },

    /// The API answered `Response: "False"`.
    #[error("Not found: {}", message.as_deref().unwrap_or("no message"))]
    NotFound {
        /// The `Error` field of the response body, if present
        message: Option<String>,
    },
}

impl MovieSearchError {
    /// Returns true for failures of the HTTP exchange itself.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::HttpStatus { .. } | Self::Network { .. } | Self::Parse { .. }
        )
    }
}
