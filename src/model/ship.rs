//! Ship data transfer objects.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::registry::RegistryError;

/// Ship response record with category details flattened onto it and the ids
/// of all currently associated owners.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShipDto {
    /// Server-assigned ship identifier.
    pub id: i64,
    /// Name of the ship.
    pub ship_name: String,
    /// International Maritime Organization number, unique across ships.
    pub imo_number: String,
    /// Type/category of the ship, absent when no details are recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_type: Option<String>,
    /// Gross tonnage, absent when no details are recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_tonnage: Option<i32>,
    /// Ids of owners this ship is currently linked to.
    pub owner_ids: BTreeSet<i64>,
}

/// Request payload for creating a new ship.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateShipRequest {
    /// Name of the ship.
    pub ship_name: String,
    /// IMO number, exactly 7 characters.
    pub imo_number: String,
    /// Optional ship type; supplying it creates category details.
    #[serde(default)]
    pub ship_type: Option<String>,
    /// Optional gross tonnage; supplying it creates category details.
    #[serde(default)]
    pub ship_tonnage: Option<i32>,
    /// Ids of existing owners to associate; must be non-empty.
    pub owner_ids: BTreeSet<i64>,
}

/// Request payload for updating an existing ship.
///
/// The IMO number is not updatable. When `owner_ids` is present the entire
/// owner association set is replaced; when absent, existing links are left
/// untouched.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShipRequest {
    /// New name of the ship; always overwritten.
    pub ship_name: String,
    /// New ship type; only written when supplied.
    #[serde(default)]
    pub ship_type: Option<String>,
    /// New gross tonnage; only written when supplied.
    #[serde(default)]
    pub ship_tonnage: Option<i32>,
    /// Replacement owner id set, if the associations should change.
    #[serde(default)]
    pub owner_ids: Option<BTreeSet<i64>>,
}

fn check_ship_name(ship_name: &str, errors: &mut BTreeMap<String, String>) {
    if ship_name.trim().is_empty() {
        errors.insert(
            "shipName".to_string(),
            "Ship name cannot be blank".to_string(),
        );
    }
}

fn check_ship_tonnage(ship_tonnage: Option<i32>, errors: &mut BTreeMap<String, String>) {
    if let Some(tonnage) = ship_tonnage {
        if tonnage < 0 {
            errors.insert(
                "shipTonnage".to_string(),
                "Ship tonnage must not be negative".to_string(),
            );
        }
    }
}

impl CreateShipRequest {
    /// Structural validation of required fields and formats.
    pub fn validate(&self) -> Result<(), RegistryError> {
        let mut errors = BTreeMap::new();

        check_ship_name(&self.ship_name, &mut errors);

        if self.imo_number.trim().is_empty() {
            errors.insert(
                "imoNumber".to_string(),
                "IMO number cannot be blank".to_string(),
            );
        } else if self.imo_number.chars().count() != 7 {
            errors.insert(
                "imoNumber".to_string(),
                "IMO number must be 7 characters".to_string(),
            );
        }

        if self.owner_ids.is_empty() {
            errors.insert(
                "ownerIds".to_string(),
                "At least one owner ID is required".to_string(),
            );
        }

        check_ship_tonnage(self.ship_tonnage, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(RegistryError::InvalidRequest(errors))
        }
    }
}

impl UpdateShipRequest {
    /// Structural validation of required fields and formats.
    pub fn validate(&self) -> Result<(), RegistryError> {
        let mut errors = BTreeMap::new();

        check_ship_name(&self.ship_name, &mut errors);
        check_ship_tonnage(self.ship_tonnage, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(RegistryError::InvalidRequest(errors))
        }
    }
}
