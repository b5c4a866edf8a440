//! Repository over the ship-owner link table.
//!
//! Every mutation of the ship-owner relationship goes through the paired
//! [`ShipOwnerRepository::link`] / [`ShipOwnerRepository::unlink`] operations
//! here. Because both directions of the relationship are views over the same
//! link rows, a single insert or delete keeps ship-to-owner and
//! owner-to-ship visibility consistent; there is no second collection to
//! fall out of sync.

use sea_orm::{
    ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait, LoaderTrait, ModelTrait,
};

pub struct ShipOwnerRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> ShipOwnerRepository<'a, C> {
    /// Creates a new instance of [`ShipOwnerRepository`]
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Associates a ship with an owner
    pub async fn link(&self, ship_id: i64, owner_id: i64) -> Result<(), DbErr> {
        let link = entity::ship_owner::ActiveModel {
            ship_id: ActiveValue::Set(ship_id),
            owner_id: ActiveValue::Set(owner_id),
        };

        // The link table has a composite primary key, so skip returning the
        // inserted row.
        entity::prelude::ShipOwner::insert(link)
            .exec_without_returning(self.conn)
            .await?;

        Ok(())
    }

    /// Disassociates a ship from an owner
    ///
    /// Returns OK regardless of the link existing; to confirm the removal
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn unlink(&self, ship_id: i64, owner_id: i64) -> Result<DeleteResult, DbErr> {
        entity::prelude::ShipOwner::delete_by_id((ship_id, owner_id))
            .exec(self.conn)
            .await
    }

    /// Gets the owners currently linked to a ship
    ///
    /// The returned Vec is an owned snapshot; callers may unlink against the
    /// live table while iterating it.
    pub async fn get_owners_of_ship(
        &self,
        ship: &entity::ship::Model,
    ) -> Result<Vec<entity::owner::Model>, DbErr> {
        ship.find_related(entity::prelude::Owner).all(self.conn).await
    }

    /// Gets the ships currently linked to an owner
    ///
    /// The returned Vec is an owned snapshot; callers may unlink against the
    /// live table while iterating it.
    pub async fn get_ships_of_owner(
        &self,
        owner: &entity::owner::Model,
    ) -> Result<Vec<entity::ship::Model>, DbErr> {
        owner.find_related(entity::prelude::Ship).all(self.conn).await
    }

    /// Batch-loads the owners of many ships in one query, in ship order
    pub async fn get_owners_for_ships(
        &self,
        ships: &[entity::ship::Model],
    ) -> Result<Vec<Vec<entity::owner::Model>>, DbErr> {
        ships
            .load_many_to_many(
                entity::prelude::Owner,
                entity::prelude::ShipOwner,
                self.conn,
            )
            .await
    }

    /// Batch-loads the ships of many owners in one query, in owner order
    pub async fn get_ships_for_owners(
        &self,
        owners: &[entity::owner::Model],
    ) -> Result<Vec<Vec<entity::ship::Model>>, DbErr> {
        owners
            .load_many_to_many(
                entity::prelude::Ship,
                entity::prelude::ShipOwner,
                self.conn,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    mod link_tests {
        use logbook_test_utils::prelude::*;

        use crate::data::ship_owner::ShipOwnerRepository;

        /// Expect the link to be visible from both sides after one insert
        #[tokio::test]
        async fn link_is_mutually_visible() -> Result<(), TestError> {
            let test = test_setup().await?;
            let link_repository = ShipOwnerRepository::new(&test.db);

            let ship = factory::insert_ship(&test.db, "MV Resolute", "9744001").await?;
            let owner = factory::insert_owner(&test.db, "Maersk Line").await?;

            link_repository.link(ship.id, owner.id).await?;

            let owners = link_repository.get_owners_of_ship(&ship).await?;
            let ships = link_repository.get_ships_of_owner(&owner).await?;

            assert_eq!(owners.len(), 1);
            assert_eq!(owners[0].id, owner.id);
            assert_eq!(ships.len(), 1);
            assert_eq!(ships[0].id, ship.id);

            Ok(())
        }

        /// Expect error when linking the same pair twice
        #[tokio::test]
        async fn fails_on_duplicate_link() -> Result<(), TestError> {
            let test = test_setup().await?;
            let link_repository = ShipOwnerRepository::new(&test.db);

            let ship = factory::insert_ship(&test.db, "MV Resolute", "9744001").await?;
            let owner = factory::insert_owner(&test.db, "Maersk Line").await?;

            link_repository.link(ship.id, owner.id).await?;
            let result = link_repository.link(ship.id, owner.id).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod unlink_tests {
        use logbook_test_utils::prelude::*;

        use crate::data::ship_owner::ShipOwnerRepository;

        /// Expect the link to disappear from both sides after one delete
        #[tokio::test]
        async fn unlink_clears_both_sides() -> Result<(), TestError> {
            let test = test_setup().await?;
            let link_repository = ShipOwnerRepository::new(&test.db);

            let ship = factory::insert_ship(&test.db, "MV Resolute", "9744001").await?;
            let owner = factory::insert_owner(&test.db, "Maersk Line").await?;
            factory::link_ship_owner(&test.db, ship.id, owner.id).await?;

            let delete_result = link_repository.unlink(ship.id, owner.id).await?;

            assert_eq!(delete_result.rows_affected, 1);
            assert!(link_repository.get_owners_of_ship(&ship).await?.is_empty());
            assert!(link_repository.get_ships_of_owner(&owner).await?.is_empty());

            Ok(())
        }

        /// Expect zero affected rows when the link does not exist
        #[tokio::test]
        async fn unlink_of_missing_link_affects_nothing() -> Result<(), TestError> {
            let test = test_setup().await?;
            let link_repository = ShipOwnerRepository::new(&test.db);

            let ship = factory::insert_ship(&test.db, "MV Resolute", "9744001").await?;
            let owner = factory::insert_owner(&test.db, "Maersk Line").await?;

            let delete_result = link_repository.unlink(ship.id, owner.id).await?;

            assert_eq!(delete_result.rows_affected, 0);

            Ok(())
        }
    }

    mod loader_tests {
        use logbook_test_utils::prelude::*;

        use crate::data::ship_owner::ShipOwnerRepository;

        /// Expect batch-loaded owner lists to line up with the ship order
        #[tokio::test]
        async fn loads_owners_per_ship() -> Result<(), TestError> {
            let test = test_setup().await?;
            let link_repository = ShipOwnerRepository::new(&test.db);

            let first_ship = factory::insert_ship(&test.db, "MV Resolute", "9744001").await?;
            let second_ship = factory::insert_ship(&test.db, "MV Endeavour", "9744002").await?;
            let owner = factory::insert_owner(&test.db, "Maersk Line").await?;
            factory::link_ship_owner(&test.db, second_ship.id, owner.id).await?;

            let ships = vec![first_ship, second_ship];
            let owners = link_repository.get_owners_for_ships(&ships).await?;

            assert_eq!(owners.len(), 2);
            assert!(owners[0].is_empty());
            assert_eq!(owners[1].len(), 1);

            Ok(())
        }
    }
}
