//! Axum web adapter for formate.
//!
//! Serves the `PdfFormate` GraphQL API at `/graphql` and the OpenAI chat
//! relay under `/{prefix}/{version}/openai-chat`. `bootstrap` is the
//! composition root; `main.rs` only parses configuration and starts it.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings for the unit-test build
#[cfg(test)]
use async_trait as _;
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tower as _;

// Used by main.rs binary
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod cli;
pub mod error;
pub mod graphql;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{AppContext, CorsConfig, DatabaseTarget, ServerConfig, bootstrap, start_server};
pub use cli::ServerArgs;
pub use error::HttpError;
pub use graphql::{FormateSchema, build_schema};
pub use routes::create_router;
pub use state::AppState;
