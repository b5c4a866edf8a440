//! Owner management service.

#[cfg(test)]
mod tests;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{OwnerRepository, ShipOwnerRepository},
    error::{registry::RegistryError, Error},
    model::owner::{CreateOwnerRequest, OwnerDto},
};

/// Service for managing vessel owners.
///
/// Provides listing, creation, and deletion of owners. Deleting an owner
/// cascades into the removal of every ship-owner link pointing at it, while
/// the ships themselves survive.
pub struct OwnerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OwnerService<'a> {
    /// Creates a new instance of [`OwnerService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns all owners, each with the ids of its currently linked ships.
    pub async fn list_owners(&self) -> Result<Vec<OwnerDto>, Error> {
        let owner_repository = OwnerRepository::new(self.db);
        let link_repository = ShipOwnerRepository::new(self.db);

        let owners = owner_repository.get_all().await?;
        let ships_per_owner = link_repository.get_ships_for_owners(&owners).await?;

        Ok(owners
            .into_iter()
            .zip(ships_per_owner)
            .map(|(owner, ships)| to_owner_dto(owner, &ships))
            .collect())
    }

    /// Creates a new owner.
    ///
    /// # Errors
    /// - [`RegistryError::DuplicateOwnerName`] if an owner with the exact
    ///   same name already exists; nothing is written in that case.
    pub async fn create_owner(&self, request: CreateOwnerRequest) -> Result<OwnerDto, Error> {
        let txn = self.db.begin().await?;

        let owner_repository = OwnerRepository::new(&txn);

        if owner_repository
            .get_by_name(&request.owner_name)
            .await?
            .is_some()
        {
            return Err(RegistryError::DuplicateOwnerName(request.owner_name).into());
        }

        let owner = owner_repository.create(&request.owner_name).await?;

        txn.commit().await?;

        Ok(to_owner_dto(owner, &[]))
    }

    /// Deletes an owner, unlinking every ship it owns first.
    ///
    /// The cascade iterates a snapshot of the owner's ships and persists each
    /// ship's updated link state before the owner row itself is removed, all
    /// inside one transaction. The ships are not deleted.
    ///
    /// # Errors
    /// - [`RegistryError::OwnerNotFound`] if no owner has this id.
    pub async fn delete_owner(&self, owner_id: i64) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let owner_repository = OwnerRepository::new(&txn);
        let link_repository = ShipOwnerRepository::new(&txn);

        let owner = owner_repository
            .get_by_id(owner_id)
            .await?
            .ok_or(RegistryError::OwnerNotFound(owner_id))?;

        // Snapshot of the owner's ships; each unlink below mutates the live
        // link table.
        let ships = link_repository.get_ships_of_owner(&owner).await?;

        for ship in &ships {
            link_repository.unlink(ship.id, owner.id).await?;
        }

        owner_repository.delete(owner.id).await?;

        txn.commit().await?;

        Ok(())
    }
}

fn to_owner_dto(owner: entity::owner::Model, ships: &[entity::ship::Model]) -> OwnerDto {
    OwnerDto {
        owner_id: owner.id,
        owner_name: owner.owner_name,
        ship_ids: ships.iter().map(|ship| ship.id).collect(),
    }
}
