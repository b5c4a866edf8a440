use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter,
};

pub struct ShipRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> ShipRepository<'a, C> {
    /// Creates a new instance of [`ShipRepository`]
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Creates a new ship with the given name and IMO number
    pub async fn create(
        &self,
        ship_name: &str,
        imo_number: &str,
    ) -> Result<entity::ship::Model, DbErr> {
        let ship = entity::ship::ActiveModel {
            ship_name: ActiveValue::Set(ship_name.to_string()),
            imo_number: ActiveValue::Set(imo_number.to_string()),
            ..Default::default()
        };

        ship.insert(self.conn).await
    }

    /// Gets a ship by its id
    pub async fn get_by_id(&self, ship_id: i64) -> Result<Option<entity::ship::Model>, DbErr> {
        entity::prelude::Ship::find_by_id(ship_id).one(self.conn).await
    }

    /// Gets a ship by its IMO number
    pub async fn get_by_imo_number(
        &self,
        imo_number: &str,
    ) -> Result<Option<entity::ship::Model>, DbErr> {
        entity::prelude::Ship::find()
            .filter(entity::ship::Column::ImoNumber.eq(imo_number))
            .one(self.conn)
            .await
    }

    /// Gets a ship together with its category details in one query
    pub async fn get_with_details(
        &self,
        ship_id: i64,
    ) -> Result<
        Option<(
            entity::ship::Model,
            Option<entity::ship_category_details::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::Ship::find_by_id(ship_id)
            .find_also_related(entity::prelude::ShipCategoryDetails)
            .one(self.conn)
            .await
    }

    /// Gets all ships together with their category details in one query
    pub async fn get_all_with_details(
        &self,
    ) -> Result<
        Vec<(
            entity::ship::Model,
            Option<entity::ship_category_details::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::Ship::find()
            .find_also_related(entity::prelude::ShipCategoryDetails)
            .all(self.conn)
            .await
    }

    /// Overwrites a ship's name; the IMO number is never updated
    pub async fn update_name(
        &self,
        ship: entity::ship::Model,
        ship_name: &str,
    ) -> Result<entity::ship::Model, DbErr> {
        let mut ship_am = ship.into_active_model();
        ship_am.ship_name = ActiveValue::Set(ship_name.to_string());

        ship_am.update(self.conn).await
    }

    /// Deletes a ship
    ///
    /// Returns OK regardless of the ship existing; to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, ship_id: i64) -> Result<DeleteResult, DbErr> {
        entity::prelude::Ship::delete_by_id(ship_id)
            .exec(self.conn)
            .await
    }
}
