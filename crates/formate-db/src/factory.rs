//! Composition utilities for building services with `SQLite` backends.
//!
//! This module is focused purely on construction and should not contain
//! any domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use formate_core::{PdfFormatRepository, PdfFormatService};

use crate::repositories::SqlitePdfFormatRepository;

/// Factory for creating repository instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Wrap a pool in the `SQLite` pdf format repository.
    pub fn pdf_format_repository(pool: SqlitePool) -> Arc<dyn PdfFormatRepository> {
        Arc::new(SqlitePdfFormatRepository::new(pool))
    }

    /// Build a ready `PdfFormatService` from a pool.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use formate_db::{CoreFactory, setup_database};
    ///
    /// let pool = setup_database(&db_path).await?;
    /// let service = CoreFactory::build_pdf_format_service(pool);
    /// ```
    pub fn build_pdf_format_service(pool: SqlitePool) -> PdfFormatService {
        PdfFormatService::new(Self::pdf_format_repository(pool))
    }
}
