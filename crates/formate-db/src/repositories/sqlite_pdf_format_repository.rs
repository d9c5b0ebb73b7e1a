//! `SQLite` implementation of the `PdfFormatRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use formate_core::{NewPdfFormat, PdfFormat, PdfFormatRepository, RepositoryError};

use super::row_mappers::{
    PDF_FORMAT_SELECT_COLUMNS, format_datetime, now_micros, row_to_pdf_format, settings_to_json,
};

/// `SQLite` implementation of the `PdfFormatRepository` trait.
///
/// Ids are generated here (UUID v4) rather than by the database, and both
/// timestamps are truncated to the microsecond precision the table keeps,
/// so a returned record equals what a later read produces.
pub struct SqlitePdfFormatRepository {
    pool: SqlitePool,
}

impl SqlitePdfFormatRepository {
    /// Create a new `SQLite` pdf format repository.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PdfFormatRepository for SqlitePdfFormatRepository {
    async fn insert(&self, new: &NewPdfFormat) -> Result<PdfFormat, RepositoryError> {
        let record = new.clone().into_record(now_micros());
        let settings = settings_to_json(record.settings.as_ref())?;

        sqlx::query(
            "INSERT INTO pdf_formate (id, name, description, format_type, settings, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&record.id)
        .bind(&record.name)
        .bind(&record.description)
        .bind(&record.format_type)
        .bind(settings)
        .bind(format_datetime(record.created_at))
        .bind(format_datetime(record.updated_at))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error().is_some_and(|db| db.is_unique_violation()) {
                RepositoryError::AlreadyExists(record.id.clone())
            } else {
                RepositoryError::Storage(e.to_string())
            }
        })?;

        tracing::debug!(id = %record.id, "Inserted pdf_formate row");
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<PdfFormat>, RepositoryError> {
        let query = format!(
            "SELECT {PDF_FORMAT_SELECT_COLUMNS} FROM pdf_formate ORDER BY created_at DESC, rowid DESC"
        );
        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_pdf_format).collect()
    }

    async fn get_by_id(&self, id: &str) -> Result<PdfFormat, RepositoryError> {
        let query = format!("SELECT {PDF_FORMAT_SELECT_COLUMNS} FROM pdf_formate WHERE id = ?");
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?
            .ok_or_else(|| RepositoryError::NotFound(format!("id={id}")))?;

        row_to_pdf_format(&row)
    }

    async fn update(&self, record: &PdfFormat) -> Result<PdfFormat, RepositoryError> {
        let settings = settings_to_json(record.settings.as_ref())?;

        let result = sqlx::query(
            "UPDATE pdf_formate
             SET name = ?, description = ?, format_type = ?, settings = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(&record.name)
        .bind(&record.description)
        .bind(&record.format_type)
        .bind(settings)
        .bind(format_datetime(record.updated_at))
        .bind(&record.id)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("id={}", record.id)));
        }

        self.get_by_id(&record.id).await
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM pdf_formate WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("id={id}")));
        }

        tracing::debug!(id = %id, "Deleted pdf_formate row");
        Ok(())
    }
}
