//! SQLite persistence for formate.
//!
//! Implements the `PdfFormatRepository` port from `formate-core` on top of
//! an `sqlx` SQLite pool and owns the table schema.
#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod setup;

// Linked only to force the bundled SQLite build.
use libsqlite3_sys as _;

// Re-export factory for convenient access
pub use factory::CoreFactory;

// Re-export repository implementations
pub use repositories::SqlitePdfFormatRepository;

// Re-export setup functions for convenient access
pub use setup::{setup_database, setup_database_url};
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
