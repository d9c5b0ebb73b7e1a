//! Internal error types for OpenAI operations.
//!
//! These errors are mapped to [`ChatProviderError`] at the port boundary.

use formate_core::ChatProviderError;
use thiserror::Error;

/// Errors raised while talking to the OpenAI API.
#[derive(Debug, Error)]
pub enum OpenAiError {
    /// No API key configured; no request was sent.
    #[error("OpenAI API key is not configured")]
    MissingApiKey,

    /// The API answered with a non-success status.
    #[error("OpenAI API request failed with status {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Provider message, or the status reason when the body had none
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A response body could not be decoded.
    #[error("Invalid response from OpenAI API: {0}")]
    Decode(String),
}

impl From<OpenAiError> for ChatProviderError {
    fn from(err: OpenAiError) -> Self {
        match err {
            OpenAiError::MissingApiKey => Self::MissingCredential,
            OpenAiError::Status { status, message } => Self::Api { status, message },
            OpenAiError::Network(e) => Self::Network(e.to_string()),
            OpenAiError::Decode(msg) => Self::InvalidResponse(msg),
        }
    }
}
