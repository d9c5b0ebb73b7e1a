//! Chat completion provider port.
//!
//! The relay talks to a hosted chat-completion API through this trait; the
//! reqwest implementation lives in `formate-openai`.

use std::pin::Pin;

use async_trait::async_trait;
use futures_util::Stream;
use thiserror::Error;

use crate::domain::{ChatCompletion, ChatCompletionRequest};

/// Lazy, finite, forward-only sequence of streamed text fragments.
///
/// Dropping the stream releases the provider connection.
pub type FragmentStream = Pin<Box<dyn Stream<Item = Result<String, ChatProviderError>> + Send>>;

/// Errors reported by a chat completion provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatProviderError {
    /// No API credential is configured.
    #[error("Chat provider API key is not configured")]
    MissingCredential,

    /// The provider could not be reached or the connection broke.
    #[error("Network error: {0}")]
    Network(String),

    /// The provider answered with an error status.
    #[error("Provider returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The provider's response could not be understood.
    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
}

/// Port for a hosted chat completion API.
#[async_trait]
pub trait ChatCompletionPort: Send + Sync {
    /// Run a completion to the end and return the first choice.
    async fn complete(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletion, ChatProviderError>;

    /// Start a streamed completion.
    ///
    /// Errors that happen before the first fragment (connection, auth,
    /// status) are returned here; later ones arrive as stream items.
    async fn stream(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<FragmentStream, ChatProviderError>;
}
