//! Chat relay service - forwards conversations to the completion provider.

use std::sync::Arc;

use crate::domain::{ChatCompletionRequest, ChatEnvelope, ChatMessage};
use crate::ports::{ChatCompletionPort, ChatProviderError, FragmentStream};

/// Relays chat requests to a [`ChatCompletionPort`].
///
/// The two calls handle failure differently: the single-shot call folds
/// provider errors into a [`ChatEnvelope`], the streaming call returns them.
pub struct ChatRelayService {
    provider: Arc<dyn ChatCompletionPort>,
}

impl ChatRelayService {
    pub fn new(provider: Arc<dyn ChatCompletionPort>) -> Self {
        Self { provider }
    }

    /// Run a blocking completion. Never fails; check `envelope.success`.
    pub async fn create_chat_completion(
        &self,
        messages: Vec<ChatMessage>,
        model: impl Into<String>,
    ) -> ChatEnvelope {
        let model = model.into();
        tracing::info!(model = %model, messages = messages.len(), "Creating chat completion");

        match self
            .provider
            .complete(ChatCompletionRequest::new(messages, model))
            .await
        {
            Ok(completion) => ChatEnvelope::success(completion),
            Err(e) => {
                tracing::error!(error = %e, "Error creating chat completion");
                ChatEnvelope::failure(e.to_string())
            }
        }
    }

    /// Start a streamed completion; provider errors propagate.
    pub async fn create_streaming_chat_completion(
        &self,
        messages: Vec<ChatMessage>,
        model: impl Into<String>,
    ) -> Result<FragmentStream, ChatProviderError> {
        let model = model.into();
        tracing::info!(model = %model, messages = messages.len(), "Creating streaming chat completion");

        self.provider
            .stream(ChatCompletionRequest::new(messages, model))
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Error creating streaming chat completion"))
    }
}
