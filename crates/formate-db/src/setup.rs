//! Database setup and initialization.
//!
//! This module provides the `setup_database()` family of functions for
//! initializing the `SQLite` database with full schema. Entry points call
//! one of them with either a file path or a connection URL.

use anyhow::Result;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

/// Sets up the `SQLite` database connection and ensures the schema exists.
///
/// This function:
/// 1. Creates the parent directory of `db_path` if needed
/// 2. Opens (or creates) the database file
/// 3. Creates all tables and indexes
///
/// # Example
///
/// ```rust,no_run
/// use formate_db::setup_database;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// let pool = setup_database(Path::new("data/formate.db")).await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup_database(db_path: &Path) -> Result<SqlitePool> {
    // Ensure parent directory exists
    if let Some(parent) = db_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let pool = SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true),
    )
    .await?;

    create_schema(&pool).await?;
    Ok(pool)
}

/// Sets up the database from a connection URL such as `sqlite://data/formate.db`.
pub async fn setup_database_url(url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
    let pool = SqlitePool::connect_with(options).await?;

    create_schema(&pool).await?;
    Ok(pool)
}

/// Sets up an in-memory `SQLite` database for testing.
///
/// Creates a fresh in-memory database with the full production schema.
/// The pool is pinned to one connection because every `:memory:`
/// connection is its own database.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_database() -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    create_schema(&pool).await?;
    Ok(pool)
}

/// Creates the complete database schema.
///
/// It is safe to call multiple times as all operations use IF NOT EXISTS.
async fn create_schema(pool: &SqlitePool) -> Result<()> {
    // Timestamps are fixed-width RFC 3339 UTC strings, so text order is time order
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS pdf_formate (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            description TEXT,
            format_type TEXT NOT NULL,
            settings TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Index backing the newest-first listing
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_pdf_formate_created_at ON pdf_formate(created_at)",
    )
    .execute(pool)
    .await?;

    Ok(())
}
