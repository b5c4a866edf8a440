//! Error response payloads shared across all API routes.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response body returned when an API request fails.
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetailsDto {
    /// When the error occurred.
    pub timestamp: DateTime<Utc>,
    /// Human-readable error message.
    pub error: String,
    /// Path of the request that failed.
    pub path: String,
}

impl ErrorDetailsDto {
    /// Builds an error body stamped with the current time.
    pub fn new(error: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            error: error.into(),
            path: path.into(),
        }
    }
}

/// The response body returned when structural request validation fails,
/// carrying one message per offending field.
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrorsDto {
    /// When the validation failure occurred.
    pub timestamp: DateTime<Utc>,
    /// HTTP status code of the response.
    pub status: u16,
    /// Summary error message.
    pub error: String,
    /// Field name to validation message map.
    pub errors: BTreeMap<String, String>,
    /// Path of the request that failed.
    pub path: String,
}

impl ValidationErrorsDto {
    /// Builds a validation failure body stamped with the current time.
    pub fn new(errors: BTreeMap<String, String>, path: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            status: 400,
            error: "Validation Failed".to_string(),
            errors,
            path: path.into(),
        }
    }
}
