//! Pdf format repository trait definition.
//!
//! This port defines the interface for record persistence operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewPdfFormat, PdfFormat};

/// Repository for pdf format persistence operations.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - CRUD-only: list, get, insert, update, delete
/// - Existence checks and merge logic belong in `PdfFormatService`
#[async_trait]
pub trait PdfFormatRepository: Send + Sync {
    /// Persist a new record, assigning its id and timestamps.
    async fn insert(&self, new: &NewPdfFormat) -> Result<PdfFormat, RepositoryError>;

    /// List all records, most recently created first.
    async fn list(&self) -> Result<Vec<PdfFormat>, RepositoryError>;

    /// Get a record by id.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the record doesn't exist.
    async fn get_by_id(&self, id: &str) -> Result<PdfFormat, RepositoryError>;

    /// Write every mutable column of `record`, keyed by its id.
    ///
    /// Returns the stored record. Returns `Err(RepositoryError::NotFound)`
    /// if the record doesn't exist.
    async fn update(&self, record: &PdfFormat) -> Result<PdfFormat, RepositoryError>;

    /// Delete a record by id.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the record doesn't exist.
    async fn delete(&self, id: &str) -> Result<(), RepositoryError>;
}
