//! Owner data transfer objects.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::registry::RegistryError;

/// Owner response record with the ids of all currently associated ships.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDto {
    /// Server-assigned owner identifier.
    pub owner_id: i64,
    /// Unique owner name.
    pub owner_name: String,
    /// Ids of ships this owner is currently linked to.
    pub ship_ids: BTreeSet<i64>,
}

/// Request payload for creating a new owner.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOwnerRequest {
    /// Name of the owner; must be unique across all owners.
    pub owner_name: String,
}

impl CreateOwnerRequest {
    /// Structural validation of required fields.
    pub fn validate(&self) -> Result<(), RegistryError> {
        let mut errors = BTreeMap::new();

        if self.owner_name.trim().is_empty() {
            errors.insert(
                "ownerName".to_string(),
                "Owner name cannot be blank".to_string(),
            );
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(RegistryError::InvalidRequest(errors))
        }
    }
}
