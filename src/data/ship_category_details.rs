use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel,
};

pub struct ShipCategoryDetailsRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> ShipCategoryDetailsRepository<'a, C> {
    /// Creates a new instance of [`ShipCategoryDetailsRepository`]
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Gets the category details for a ship, if any exist
    pub async fn get_by_ship_id(
        &self,
        ship_id: i64,
    ) -> Result<Option<entity::ship_category_details::Model>, DbErr> {
        entity::prelude::ShipCategoryDetails::find_by_id(ship_id)
            .one(self.conn)
            .await
    }

    /// Creates category details for a ship that has none yet
    pub async fn create(
        &self,
        ship_id: i64,
        ship_type: Option<String>,
        ship_tonnage: Option<i32>,
    ) -> Result<entity::ship_category_details::Model, DbErr> {
        let details = entity::ship_category_details::ActiveModel {
            ship_id: ActiveValue::Set(ship_id),
            ship_type: ActiveValue::Set(ship_type),
            ship_tonnage: ActiveValue::Set(ship_tonnage),
        };

        details.insert(self.conn).await
    }

    /// Updates existing category details, writing only the supplied fields
    pub async fn update(
        &self,
        details: entity::ship_category_details::Model,
        ship_type: Option<String>,
        ship_tonnage: Option<i32>,
    ) -> Result<entity::ship_category_details::Model, DbErr> {
        let mut details_am = details.into_active_model();

        if let Some(ship_type) = ship_type {
            details_am.ship_type = ActiveValue::Set(Some(ship_type));
        }
        if let Some(ship_tonnage) = ship_tonnage {
            details_am.ship_tonnage = ActiveValue::Set(Some(ship_tonnage));
        }

        details_am.update(self.conn).await
    }

    /// Deletes the category details of a ship
    ///
    /// Returns OK regardless of details existing; to confirm the removal
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete_by_ship_id(&self, ship_id: i64) -> Result<DeleteResult, DbErr> {
        entity::prelude::ShipCategoryDetails::delete_by_id(ship_id)
            .exec(self.conn)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod create_tests {
        use logbook_test_utils::prelude::*;

        use crate::data::ship_category_details::ShipCategoryDetailsRepository;

        /// Expect success when creating details for an existing ship
        #[tokio::test]
        async fn creates_details() -> Result<(), TestError> {
            let test = test_setup().await?;
            let details_repository = ShipCategoryDetailsRepository::new(&test.db);

            let ship = factory::insert_ship(&test.db, "MV Resolute", "9744001").await?;

            let details = details_repository
                .create(ship.id, Some("Cargo".to_string()), Some(50_000))
                .await?;

            assert_eq!(details.ship_id, ship.id);
            assert_eq!(details.ship_type.as_deref(), Some("Cargo"));
            assert_eq!(details.ship_tonnage, Some(50_000));

            Ok(())
        }

        /// Expect success with one field absent; details are created as soon
        /// as either field is supplied
        #[tokio::test]
        async fn creates_details_with_type_only() -> Result<(), TestError> {
            let test = test_setup().await?;
            let details_repository = ShipCategoryDetailsRepository::new(&test.db);

            let ship = factory::insert_ship(&test.db, "MV Resolute", "9744001").await?;

            let details = details_repository
                .create(ship.id, Some("Cargo".to_string()), None)
                .await?;

            assert!(details.ship_tonnage.is_none());

            Ok(())
        }
    }

    mod update_tests {
        use logbook_test_utils::prelude::*;

        use crate::data::ship_category_details::ShipCategoryDetailsRepository;

        /// Expect only the supplied field to change
        #[tokio::test]
        async fn updates_supplied_field_only() -> Result<(), TestError> {
            let test = test_setup().await?;
            let details_repository = ShipCategoryDetailsRepository::new(&test.db);

            let ship = factory::insert_ship(&test.db, "MV Resolute", "9744001").await?;
            let details =
                factory::insert_ship_category_details(&test.db, ship.id, Some("Cargo"), Some(50_000))
                    .await?;

            let updated = details_repository
                .update(details, None, Some(60_000))
                .await?;

            assert_eq!(updated.ship_type.as_deref(), Some("Cargo"));
            assert_eq!(updated.ship_tonnage, Some(60_000));

            Ok(())
        }
    }

    mod delete_tests {
        use logbook_test_utils::prelude::*;

        use crate::data::ship_category_details::ShipCategoryDetailsRepository;

        /// Expect one affected row when deleting existing details
        #[tokio::test]
        async fn deletes_details() -> Result<(), TestError> {
            let test = test_setup().await?;
            let details_repository = ShipCategoryDetailsRepository::new(&test.db);

            let ship = factory::insert_ship(&test.db, "MV Resolute", "9744001").await?;
            factory::insert_ship_category_details(&test.db, ship.id, Some("Cargo"), None).await?;

            let delete_result = details_repository.delete_by_ship_id(ship.id).await?;

            assert_eq!(delete_result.rows_affected, 1);
            assert!(details_repository.get_by_ship_id(ship.id).await?.is_none());

            Ok(())
        }

        /// Expect zero affected rows when no details exist
        #[tokio::test]
        async fn deletes_nothing_without_details() -> Result<(), TestError> {
            let test = test_setup().await?;
            let details_repository = ShipCategoryDetailsRepository::new(&test.db);

            let delete_result = details_repository.delete_by_ship_id(1).await?;

            assert_eq!(delete_result.rows_affected, 0);

            Ok(())
        }
    }
}
