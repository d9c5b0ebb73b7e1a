//! Domain types, independent of any infrastructure concerns.

pub mod chat;
pub mod pdf_format;

pub use chat::{
    ChatCompletion, ChatCompletionRequest, ChatEnvelope, ChatMessage, DEFAULT_CHAT_MODEL,
    DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, MessageRole, SUPPORTED_MODELS, TokenUsage,
};
pub use pdf_format::{NewPdfFormat, PdfFormat, PdfFormatUpdate, Settings};
