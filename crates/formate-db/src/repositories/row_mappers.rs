//! Row mapping helpers for `SQLite` queries.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use formate_core::{PdfFormat, RepositoryError, Settings};
use sqlx::Row;

/// Shared SELECT column list for pdf format queries.
pub const PDF_FORMAT_SELECT_COLUMNS: &str =
    "id, name, description, format_type, settings, created_at, updated_at";

/// Current time at the precision the table stores.
pub fn now_micros() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Render a timestamp as fixed-width RFC 3339 UTC with microseconds.
pub fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse a stored timestamp column.
pub fn parse_datetime(column: &str, value: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Serialization(format!("{column}: {e}")))
}

/// Serialize the settings object for the TEXT column.
pub fn settings_to_json(settings: Option<&Settings>) -> Result<Option<String>, RepositoryError> {
    settings
        .map(serde_json::to_string)
        .transpose()
        .map_err(|e| RepositoryError::Serialization(e.to_string()))
}

/// Parse a database row into a `PdfFormat`.
pub fn row_to_pdf_format(row: &sqlx::sqlite::SqliteRow) -> Result<PdfFormat, RepositoryError> {
    let settings_json: Option<String> = row
        .try_get("settings")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    let settings = settings_json
        .map(|json| serde_json::from_str::<Settings>(&json))
        .transpose()
        .map_err(|e| RepositoryError::Serialization(format!("settings: {e}")))?;

    let created_at: String = row
        .try_get("created_at")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    let updated_at: String = row
        .try_get("updated_at")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    Ok(PdfFormat {
        id: row
            .try_get("id")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        name: row
            .try_get("name")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        description: row
            .try_get("description")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        format_type: row
            .try_get("format_type")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        settings,
        created_at: parse_datetime("created_at", &created_at)?,
        updated_at: parse_datetime("updated_at", &updated_at)?,
    })
}
