//! Ship management service.

#[cfg(test)]
mod tests;

use std::collections::BTreeSet;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    data::{OwnerRepository, ShipCategoryDetailsRepository, ShipOwnerRepository, ShipRepository},
    error::{registry::RegistryError, Error},
    model::ship::{CreateShipRequest, ShipDto, UpdateShipRequest},
};

/// Service for managing ships.
///
/// Provides listing, retrieval, creation, update, and deletion of ships,
/// including the upkeep of their owner associations and optional category
/// details. Every mutating operation runs inside one transaction; a failure
/// partway through a cascade rolls the whole operation back.
pub struct ShipService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShipService<'a> {
    /// Creates a new instance of [`ShipService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns all ships with flattened details and owner id sets.
    pub async fn list_ships(&self) -> Result<Vec<ShipDto>, Error> {
        let ship_repository = ShipRepository::new(self.db);
        let link_repository = ShipOwnerRepository::new(self.db);

        let (ships, details): (Vec<_>, Vec<_>) = ship_repository
            .get_all_with_details()
            .await?
            .into_iter()
            .unzip();
        let owners_per_ship = link_repository.get_owners_for_ships(&ships).await?;

        Ok(ships
            .into_iter()
            .zip(details)
            .zip(owners_per_ship)
            .map(|((ship, details), owners)| to_ship_dto(ship, details, &owners))
            .collect())
    }

    /// Returns one ship with its details and owners eagerly resolved.
    ///
    /// # Errors
    /// - [`RegistryError::ShipNotFound`] if no ship has this id.
    pub async fn get_ship(&self, ship_id: i64) -> Result<ShipDto, Error> {
        let ship_repository = ShipRepository::new(self.db);
        let link_repository = ShipOwnerRepository::new(self.db);

        let (ship, details) = ship_repository
            .get_with_details(ship_id)
            .await?
            .ok_or(RegistryError::ShipNotFound(ship_id))?;

        let owners = link_repository.get_owners_of_ship(&ship).await?;

        Ok(to_ship_dto(ship, details, &owners))
    }

    /// Creates a new ship and links it to every requested owner.
    ///
    /// Category details are attached only when a type or tonnage is supplied.
    ///
    /// # Errors
    /// - [`RegistryError::DuplicateImoNumber`] if the IMO number is taken;
    ///   nothing is written in that case.
    /// - [`RegistryError::EmptyOwnerIds`] if no owner ids were requested.
    /// - [`RegistryError::OwnersNotFound`] naming exactly the requested ids
    ///   that do not exist; no partial association is persisted.
    pub async fn create_ship(&self, request: CreateShipRequest) -> Result<ShipDto, Error> {
        let txn = self.db.begin().await?;

        let ship_repository = ShipRepository::new(&txn);
        let details_repository = ShipCategoryDetailsRepository::new(&txn);
        let link_repository = ShipOwnerRepository::new(&txn);

        if ship_repository
            .get_by_imo_number(&request.imo_number)
            .await?
            .is_some()
        {
            return Err(RegistryError::DuplicateImoNumber(request.imo_number).into());
        }

        let owners = resolve_owners(&txn, &request.owner_ids).await?;

        let ship = ship_repository
            .create(&request.ship_name, &request.imo_number)
            .await?;

        let details = if request.ship_type.is_some() || request.ship_tonnage.is_some() {
            Some(
                details_repository
                    .create(ship.id, request.ship_type, request.ship_tonnage)
                    .await?,
            )
        } else {
            None
        };

        for owner in &owners {
            link_repository.link(ship.id, owner.id).await?;
        }

        txn.commit().await?;

        Ok(to_ship_dto(ship, details, &owners))
    }

    /// Updates a ship's name, details, and optionally its whole owner set.
    ///
    /// The IMO number is never updatable through this path. When a type or
    /// tonnage is supplied, details are created on first use or the supplied
    /// fields are written onto the existing row; existing details are left
    /// untouched otherwise. When `owner_ids` is present the entire
    /// association set is replaced; when it is absent, links stay as they
    /// are. The ship is re-read after commit so the response reflects the
    /// persisted association state.
    ///
    /// # Errors
    /// - [`RegistryError::ShipNotFound`] if no ship has this id.
    /// - [`RegistryError::EmptyOwnerIds`] if `owner_ids` is present but
    ///   empty; replacing the owner set with nothing is not supported.
    /// - [`RegistryError::OwnersNotFound`] naming exactly the requested ids
    ///   that do not exist; the previous links are restored by rollback.
    pub async fn update_ship(
        &self,
        ship_id: i64,
        request: UpdateShipRequest,
    ) -> Result<ShipDto, Error> {
        let txn = self.db.begin().await?;

        let ship_repository = ShipRepository::new(&txn);
        let details_repository = ShipCategoryDetailsRepository::new(&txn);
        let link_repository = ShipOwnerRepository::new(&txn);

        let ship = ship_repository
            .get_by_id(ship_id)
            .await?
            .ok_or(RegistryError::ShipNotFound(ship_id))?;

        let ship = ship_repository
            .update_name(ship, &request.ship_name)
            .await?;

        if request.ship_type.is_some() || request.ship_tonnage.is_some() {
            match details_repository.get_by_ship_id(ship.id).await? {
                Some(details) => {
                    details_repository
                        .update(details, request.ship_type, request.ship_tonnage)
                        .await?;
                }
                None => {
                    details_repository
                        .create(ship.id, request.ship_type, request.ship_tonnage)
                        .await?;
                }
            }
        }

        if let Some(owner_ids) = &request.owner_ids {
            // Snapshot of the current owners; each unlink below mutates the
            // live link table.
            let current_owners = link_repository.get_owners_of_ship(&ship).await?;

            for owner in &current_owners {
                link_repository.unlink(ship.id, owner.id).await?;
            }

            let new_owners = resolve_owners(&txn, owner_ids).await?;

            for owner in &new_owners {
                link_repository.link(ship.id, owner.id).await?;
            }
        }

        txn.commit().await?;

        // Re-read with details and owners resolved for a consistent response.
        self.get_ship(ship_id).await
    }

    /// Deletes a ship, unlinking every owner and discarding its details.
    ///
    /// The owners themselves survive with this ship removed from their
    /// reverse view.
    ///
    /// # Errors
    /// - [`RegistryError::ShipNotFound`] if no ship has this id.
    pub async fn delete_ship(&self, ship_id: i64) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let ship_repository = ShipRepository::new(&txn);
        let details_repository = ShipCategoryDetailsRepository::new(&txn);
        let link_repository = ShipOwnerRepository::new(&txn);

        let ship = ship_repository
            .get_by_id(ship_id)
            .await?
            .ok_or(RegistryError::ShipNotFound(ship_id))?;

        // Snapshot of the current owners; each unlink below mutates the live
        // link table.
        let owners = link_repository.get_owners_of_ship(&ship).await?;

        for owner in &owners {
            link_repository.unlink(ship.id, owner.id).await?;
        }

        details_repository.delete_by_ship_id(ship.id).await?;
        ship_repository.delete(ship.id).await?;

        txn.commit().await?;

        Ok(())
    }
}

/// Resolves a set of owner ids to owner rows in one query.
///
/// Fails with [`RegistryError::EmptyOwnerIds`] on an empty set, and with
/// [`RegistryError::OwnersNotFound`] naming exactly the missing ids when the
/// resolved count falls short of the requested set.
async fn resolve_owners<C: ConnectionTrait>(
    conn: &C,
    owner_ids: &BTreeSet<i64>,
) -> Result<Vec<entity::owner::Model>, Error> {
    if owner_ids.is_empty() {
        return Err(RegistryError::EmptyOwnerIds.into());
    }

    let ids: Vec<i64> = owner_ids.iter().copied().collect();
    let owners = OwnerRepository::new(conn).get_many_by_ids(&ids).await?;

    if owners.len() != owner_ids.len() {
        let found_ids: BTreeSet<i64> = owners.iter().map(|owner| owner.id).collect();
        let missing_ids: Vec<i64> = owner_ids.difference(&found_ids).copied().collect();

        return Err(RegistryError::OwnersNotFound(missing_ids).into());
    }

    Ok(owners)
}

fn to_ship_dto(
    ship: entity::ship::Model,
    details: Option<entity::ship_category_details::Model>,
    owners: &[entity::owner::Model],
) -> ShipDto {
    ShipDto {
        id: ship.id,
        ship_name: ship.ship_name,
        imo_number: ship.imo_number,
        ship_type: details.as_ref().and_then(|d| d.ship_type.clone()),
        ship_tonnage: details.as_ref().and_then(|d| d.ship_tonnage),
        owner_ids: owners.iter().map(|owner| owner.id).collect(),
    }
}
