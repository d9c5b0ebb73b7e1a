//! Reqwest-backed implementation of [`ChatCompletionPort`].

use async_trait::async_trait;
use tracing::{debug, warn};

use formate_core::{
    ChatCompletion, ChatCompletionPort, ChatCompletionRequest, ChatProviderError, FragmentStream,
};

use crate::config::OpenAiConfig;
use crate::error::OpenAiError;
use crate::sse::fragment_stream;
use crate::wire::{ChatRequestBody, ChatResponseBody, error_message};

/// Chat completion client for the OpenAI API (or any compatible server).
///
/// Construction never requires a key. Without one the client is inert:
/// every call fails with [`ChatProviderError::MissingCredential`] before
/// any request is sent.
pub struct OpenAiChatClient {
    http: reqwest::Client,
    config: OpenAiConfig,
}

impl OpenAiChatClient {
    pub fn new(config: OpenAiConfig) -> Result<Self, OpenAiError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .connect_timeout(config.connect_timeout)
            .build()?;

        if !config.has_api_key() {
            warn!("OPENAI_API_KEY is not set; chat completions will fail until it is configured");
        }

        Ok(Self { http, config })
    }

    /// POST the request and return the response once its status is a success.
    async fn send(
        &self,
        request: &ChatCompletionRequest,
        stream: bool,
    ) -> Result<reqwest::Response, OpenAiError> {
        let key = self
            .config
            .api_key
            .as_deref()
            .ok_or(OpenAiError::MissingApiKey)?;

        debug!(model = %request.model, stream, "Sending chat completion request");

        let response = self
            .http
            .post(self.config.completions_url())
            .bearer_auth(key)
            .json(&ChatRequestBody::new(request, stream))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                debug!(%status, error = %e, "Failed to read error response body");
                String::new()
            }
        };
        Err(OpenAiError::Status {
            status: status.as_u16(),
            message: error_message(&body, status.canonical_reason().unwrap_or("request failed")),
        })
    }
}

#[async_trait]
impl ChatCompletionPort for OpenAiChatClient {
    async fn complete(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletion, ChatProviderError> {
        let response = self.send(&request, false).await?;
        let body: ChatResponseBody = response
            .json()
            .await
            .map_err(|e| OpenAiError::Decode(e.to_string()))?;

        Ok(body.into())
    }

    async fn stream(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<FragmentStream, ChatProviderError> {
        let response = self.send(&request, true).await?;
        Ok(fragment_stream(response.bytes_stream()))
    }
}
