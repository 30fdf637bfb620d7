//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

/// Shared resources cloned into each handler through Axum's state extraction.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Clones share the pool.
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
