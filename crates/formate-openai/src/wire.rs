//! Request and response bodies of the `/chat/completions` endpoint.

use formate_core::{ChatCompletion, ChatCompletionRequest, ChatMessage, MessageRole, TokenUsage};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequestBody<'a> {
    pub model: &'a str,
    pub messages: &'a [ChatMessage],
    pub temperature: f32,
    pub max_tokens: u32,
    pub stream: bool,
}

impl<'a> ChatRequestBody<'a> {
    pub fn new(request: &'a ChatCompletionRequest, stream: bool) -> Self {
        Self {
            model: &request.model,
            messages: &request.messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            stream,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponseBody {
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<TokenUsage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Choice {
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChoiceMessage {
    #[serde(default = "assistant_role")]
    pub role: MessageRole,
    /// Null when the model answered with tool calls only.
    #[serde(default)]
    pub content: Option<String>,
}

const fn assistant_role() -> MessageRole {
    MessageRole::Assistant
}

impl From<ChatResponseBody> for ChatCompletion {
    fn from(body: ChatResponseBody) -> Self {
        let message = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .map(|m| ChatMessage::new(m.role, m.content.unwrap_or_default()));

        Self {
            message,
            usage: body.usage,
        }
    }
}

/// One `data:` payload of a streamed completion.
#[derive(Debug, Deserialize)]
pub(crate) struct StreamChunk {
    #[serde(default)]
    pub choices: Vec<StreamChoice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StreamChoice {
    #[serde(default)]
    pub delta: Delta,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Delta {
    #[serde(default)]
    pub content: Option<String>,
}

impl StreamChunk {
    /// Text carried by the first choice, if any.
    pub fn into_content(self) -> Option<String> {
        self.choices.into_iter().next().and_then(|c| c.delta.content)
    }
}

/// Error body: `{"error": {"message": "..."}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorDetail {
    pub message: String,
}

/// Best human-readable message for a failed response body.
pub(crate) fn error_message(body: &str, fallback: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.error.message;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
