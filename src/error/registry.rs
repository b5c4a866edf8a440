//! Domain errors for vessel and owner operations.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{ErrorDetailsDto, ValidationErrorsDto};

/// Business-rule violations and failed lookups raised by the services.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// No ship exists with the requested id.
    #[error("Ship not found with id: {0}")]
    ShipNotFound(i64),
    /// No owner exists with the requested id.
    #[error("Owner not found with id: {0}")]
    OwnerNotFound(i64),
    /// One or more requested owner ids do not resolve to existing owners.
    #[error("Owner(s) not found with id(s): {0:?}")]
    OwnersNotFound(Vec<i64>),
    /// A ship with this IMO number is already registered.
    #[error("Ship with IMO number {0} already exists")]
    DuplicateImoNumber(String),
    /// An owner with this name is already registered.
    #[error("Owner with name {0} already exists")]
    DuplicateOwnerName(String),
    /// A ship association was requested with no owner ids at all.
    #[error("Owner IDs cannot be empty for ship association")]
    EmptyOwnerIds,
    /// Structural request validation failed; one message per offending field.
    #[error("Request validation failed")]
    InvalidRequest(BTreeMap<String, String>),
}

impl RegistryError {
    fn status(&self) -> StatusCode {
        match self {
            Self::ShipNotFound(_) | Self::OwnerNotFound(_) | Self::OwnersNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            Self::DuplicateImoNumber(_)
            | Self::DuplicateOwnerName(_)
            | Self::EmptyOwnerIds
            | Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Converts the error into an HTTP response whose body names the request
    /// path that failed.
    pub(crate) fn into_response_at(self, path: &str) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::InvalidRequest(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorsDto::new(errors, path)),
            )
                .into_response(),
            err => {
                let status = err.status();

                (status, Json(ErrorDetailsDto::new(err.to_string(), path))).into_response()
            }
        }
    }
}
