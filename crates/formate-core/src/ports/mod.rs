//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` or `reqwest` types in any signature
//! - Repository traits are minimal and CRUD-focused
//! - The chat provider port speaks domain requests and text fragments

pub mod chat_completion;
pub mod pdf_format_repository;

use thiserror::Error;

use crate::validation::ValidationErrors;

pub use chat_completion::{ChatCompletionPort, ChatProviderError, FragmentStream};
pub use pdf_format_repository::PdfFormatRepository;

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("{0}")]
    NotFound(String),

    /// An entity with the same identifier already exists.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Errors of the record service.
///
/// Adapters map this to their own error types. Chat relay failures stay
/// [`ChatProviderError`], which callers report to the client as data.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Input rejected before reaching a service.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
}

impl CoreError {
    /// True when the error means "no such record".
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Repository(RepositoryError::NotFound(_)))
    }
}
