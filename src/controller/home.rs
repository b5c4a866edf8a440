//! Root redirects to the interactive API documentation.

use axum::response::Redirect;

/// Redirects `/` and `/docs` to the Swagger UI.
pub async fn home() -> Redirect {
    Redirect::permanent("/api/docs")
}
