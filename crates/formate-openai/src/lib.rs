//! OpenAI chat completion client for formate.
//!
//! Implements [`formate_core::ChatCompletionPort`] over the hosted
//! `/chat/completions` endpoint, both single-shot and streamed (SSE).
//!
//! # Example
//!
//! ```ignore
//! use formate_openai::{OpenAiChatClient, OpenAiConfig};
//!
//! let client = OpenAiChatClient::new(
//!     OpenAiConfig::new().with_optional_api_key(std::env::var("OPENAI_API_KEY").ok()),
//! )?;
//! ```

#![deny(unused_crate_dependencies)]

// Used only by integration tests
#[cfg(test)]
use axum as _;

mod client;
mod config;
mod error;
mod sse;
mod wire;

pub use client::OpenAiChatClient;
pub use config::{DEFAULT_BASE_URL, OpenAiConfig};
pub use error::OpenAiError;
