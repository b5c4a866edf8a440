//! Error types for the registry server.
//!
//! Domain failures are expressed through [`registry::RegistryError`] and
//! translated into HTTP responses at the boundary; anything unanticipated is
//! logged and surfaced as a generic 500. Every error response body carries a
//! timestamp, a message, and the path of the failing request.

pub mod registry;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{error::registry::RegistryError, model::api::ErrorDetailsDto};

/// Main error type for the registry server.
///
/// Aggregates the domain error type and database errors into a single unified
/// error, with `thiserror`'s `#[from]` enabling `?` conversion from both.
#[derive(Error, Debug)]
pub enum Error {
    /// Registry business-rule violation or failed lookup.
    #[error(transparent)]
    Registry(#[from] RegistryError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

impl Error {
    /// Attaches the request path, producing a responder whose body names the
    /// request that failed.
    pub fn at(self, path: &str) -> ApiError {
        ApiError {
            error: self,
            path: path.to_string(),
        }
    }
}

/// An [`Error`] paired with the path of the request it occurred on.
///
/// Handlers build this via [`Error::at`] so the error body can carry the
/// request path, which `IntoResponse` alone cannot see.
pub struct ApiError {
    error: Error,
    path: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.error {
            Error::Registry(err) => err.into_response_at(&self.path),
            err => InternalServerError(err, self.path).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// Logs the full error message, but returns a generic message to the client
/// to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E, pub String);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDetailsDto::new("An unexpected error occurred", self.1)),
        )
            .into_response()
    }
}
