//! Shared application state type.

use crate::bootstrap::AppContext;
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// This is an Arc-wrapped `AppContext` holding the services and the
/// GraphQL schema.
pub type AppState = Arc<AppContext>;
