//! Core domain for formate: the `PdfFormate` resource and the chat relay.
//!
//! This crate owns the domain types, the port traits adapters implement
//! (`formate-db`, `formate-openai`) and the thin services the HTTP layer
//! calls. It has no storage or transport dependencies.
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

// Re-export commonly used types for convenience
pub use domain::{
    ChatCompletion, ChatCompletionRequest, ChatEnvelope, ChatMessage, DEFAULT_CHAT_MODEL,
    DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, MessageRole, NewPdfFormat, PdfFormat,
    PdfFormatUpdate, SUPPORTED_MODELS, Settings, TokenUsage,
};
pub use ports::{
    ChatCompletionPort, ChatProviderError, CoreError, FragmentStream, PdfFormatRepository,
    RepositoryError,
};
pub use services::{ChatRelayService, PdfFormatService};
pub use validation::{FieldViolation, ValidationErrors};

// Silence unused dev-dependency warnings for the unit-test build
#[cfg(test)]
use tokio as _;
