//! Error types for the mapping API client.

use thiserror::Error;

/// Errors returned by [`MappingApi`](crate::MappingApi) calls.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The configured base URL cannot be used to build endpoint URLs.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The rejected base URL.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The backend answered with a non-success status.
    #[error("HTTP error! Status: {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The response body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Returns a short message suitable for an alert.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::InvalidBaseUrl { .. } => "The mapping service address is not valid.",
            Self::Status { status, .. } if *status >= 500 => {
                "The mapping service failed to build the table."
            }
            Self::Status { .. } => "The mapping service rejected the request.",
            Self::Network(_) => {
                "Could not reach the mapping service. Please check that it is running."
            }
            Self::Decode(_) => "The mapping service sent an unreadable response.",
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Result type alias for API calls.
pub type Result<T> = std::result::Result<T, ApiError>;
