//! Chat relay domain types.
//!
//! Nothing here is persisted: a chat request is the ordered conversation
//! history plus an optional model override, forwarded as-is to the provider.

use serde::{Deserialize, Serialize};

/// Model used when a request does not name one.
pub const DEFAULT_CHAT_MODEL: &str = "gpt-3.5-turbo";

/// Sampling temperature sent with every completion request.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Completion token cap sent with every completion request.
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Models advertised by the `models` endpoint.
pub const SUPPORTED_MODELS: &[&str] = &[
    "gpt-3.5-turbo",
    "gpt-3.5-turbo-16k",
    "gpt-4",
    "gpt-4-turbo",
    "gpt-4o",
];

/// The role of a message sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// One message of a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }
}

/// Token accounting reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// What the relay asks the provider for.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl ChatCompletionRequest {
    /// Build a request with the relay's fixed sampling parameters.
    pub fn new(messages: Vec<ChatMessage>, model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

/// A finished (non-streamed) completion.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatCompletion {
    /// The first choice's message; absent when the provider returned no choices.
    pub message: Option<ChatMessage>,
    pub usage: Option<TokenUsage>,
}

/// Response wrapper of the single-shot chat call.
///
/// Provider failures are carried as data (`success: false` plus `error`)
/// instead of propagating, so callers must check `success`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatEnvelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ChatMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<TokenUsage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChatEnvelope {
    pub fn success(completion: ChatCompletion) -> Self {
        Self {
            success: true,
            data: completion.message,
            usage: completion.usage,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            usage: None,
            error: Some(error.into()),
        }
    }
}
