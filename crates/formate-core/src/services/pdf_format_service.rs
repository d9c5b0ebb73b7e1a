//! Pdf format service - orchestrates record CRUD operations.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::{NewPdfFormat, PdfFormat, PdfFormatUpdate};
use crate::ports::{CoreError, PdfFormatRepository, RepositoryError};

/// Service for pdf format operations.
///
/// Adds existence checks in front of mutations and the descriptive
/// NotFound message; everything else is delegated to the repository.
pub struct PdfFormatService {
    repo: Arc<dyn PdfFormatRepository>,
}

impl PdfFormatService {
    /// Create a new service with the given repository.
    pub fn new(repo: Arc<dyn PdfFormatRepository>) -> Self {
        Self { repo }
    }

    /// Persist a new record and return it with its generated fields.
    pub async fn create(&self, new: NewPdfFormat) -> Result<PdfFormat, CoreError> {
        let record = self.repo.insert(&new).await?;
        tracing::debug!(id = %record.id, "Created pdf format");
        Ok(record)
    }

    /// All records, most recently created first.
    pub async fn find_all(&self) -> Result<Vec<PdfFormat>, CoreError> {
        self.repo.list().await.map_err(CoreError::from)
    }

    /// A single record, or NotFound naming the id.
    pub async fn find_one(&self, id: &str) -> Result<PdfFormat, CoreError> {
        match self.repo.get_by_id(id).await {
            Ok(record) => Ok(record),
            Err(RepositoryError::NotFound(_)) => Err(not_found(id)),
            Err(e) => Err(CoreError::from(e)),
        }
    }

    /// Overlay `update` onto the record `id` and persist the result.
    ///
    /// `id` is authoritative: the update carries no identifier of its own.
    pub async fn update(&self, id: &str, update: PdfFormatUpdate) -> Result<PdfFormat, CoreError> {
        let mut record = self.find_one(id).await?;
        if update.is_empty() {
            // Nothing to write; updated_at stays put
            return Ok(record);
        }
        update.apply_to(&mut record, Utc::now());

        match self.repo.update(&record).await {
            Ok(stored) => Ok(stored),
            Err(RepositoryError::NotFound(_)) => Err(not_found(id)),
            Err(e) => Err(CoreError::from(e)),
        }
    }

    /// Delete the record `id` and hand back its last state.
    pub async fn remove(&self, id: &str) -> Result<PdfFormat, CoreError> {
        let record = self.find_one(id).await?;

        match self.repo.delete(&record.id).await {
            Ok(()) => {
                tracing::debug!(id = %record.id, "Removed pdf format");
                Ok(record)
            }
            Err(RepositoryError::NotFound(_)) => Err(not_found(id)),
            Err(e) => Err(CoreError::from(e)),
        }
    }
}

fn not_found(id: &str) -> CoreError {
    CoreError::Repository(RepositoryError::NotFound(format!(
        "PdfFormate with ID {id} not found"
    )))
}
