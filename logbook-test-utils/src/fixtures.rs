//! Fixture factories for inserting registry rows directly, bypassing the
//! service layer so tests can arrange arbitrary starting states.

pub mod factory {
    use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, EntityTrait};

    use crate::error::TestError;

    /// Inserts an owner row with the given name.
    pub async fn insert_owner<C: ConnectionTrait>(
        db: &C,
        owner_name: &str,
    ) -> Result<entity::owner::Model, TestError> {
        let owner = entity::owner::ActiveModel {
            owner_name: ActiveValue::Set(owner_name.to_string()),
            ..Default::default()
        };

        Ok(owner.insert(db).await?)
    }

    /// Inserts a ship row with the given name and IMO number.
    pub async fn insert_ship<C: ConnectionTrait>(
        db: &C,
        ship_name: &str,
        imo_number: &str,
    ) -> Result<entity::ship::Model, TestError> {
        let ship = entity::ship::ActiveModel {
            ship_name: ActiveValue::Set(ship_name.to_string()),
            imo_number: ActiveValue::Set(imo_number.to_string()),
            ..Default::default()
        };

        Ok(ship.insert(db).await?)
    }

    /// Inserts a category details row for an existing ship.
    pub async fn insert_ship_category_details<C: ConnectionTrait>(
        db: &C,
        ship_id: i64,
        ship_type: Option<&str>,
        ship_tonnage: Option<i32>,
    ) -> Result<entity::ship_category_details::Model, TestError> {
        let details = entity::ship_category_details::ActiveModel {
            ship_id: ActiveValue::Set(ship_id),
            ship_type: ActiveValue::Set(ship_type.map(str::to_string)),
            ship_tonnage: ActiveValue::Set(ship_tonnage),
        };

        Ok(details.insert(db).await?)
    }

    /// Inserts a ship-owner link row directly.
    pub async fn link_ship_owner<C: ConnectionTrait>(
        db: &C,
        ship_id: i64,
        owner_id: i64,
    ) -> Result<(), TestError> {
        let link = entity::ship_owner::ActiveModel {
            ship_id: ActiveValue::Set(ship_id),
            owner_id: ActiveValue::Set(owner_id),
        };

        entity::ship_owner::Entity::insert(link)
            .exec_without_returning(db)
            .await?;

        Ok(())
    }
}
