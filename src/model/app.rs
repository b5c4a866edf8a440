//! Shared application state handed to every request handler.

use sea_orm::DatabaseConnection;

/// State cloned into each handler by axum.
#[derive(Clone)]
pub struct AppState {
    /// Pooled connection to the registry database.
    pub db: DatabaseConnection,
}
