//! Error types for the profile API client.

use thiserror::Error;

/// Errors that can occur while talking to the profile API.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// No usable token in the session.
    #[error("not authenticated")]
    NotAuthenticated,

    /// Network request failed.
    #[error("network error: {0}")]
    Network(String),

    /// The API answered with a failure status.
    #[error("request rejected ({status}): {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Message taken from the response body, or a fallback.
        message: String,
    },

    /// Failed to parse JSON response.
    #[error("JSON parse error: {0}")]
    JsonParse(String),
}

impl ClientError {
    /// Returns a user-friendly error message suitable for display.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::NotAuthenticated => "No token found. Please log in again.",
            Self::Rejected { message, .. } => message,
            Self::Network(_) | Self::JsonParse(_) => {
                "Something went wrong. Please try again later."
            }
        }
    }

    /// Returns whether this error is potentially recoverable with a retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Rejected { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParse(err.to_string())
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
