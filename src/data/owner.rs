use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter,
};

pub struct OwnerRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> OwnerRepository<'a, C> {
    /// Creates a new instance of [`OwnerRepository`]
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Creates a new owner with the given name
    pub async fn create(&self, owner_name: &str) -> Result<entity::owner::Model, DbErr> {
        let owner = entity::owner::ActiveModel {
            owner_name: ActiveValue::Set(owner_name.to_string()),
            ..Default::default()
        };

        owner.insert(self.conn).await
    }

    /// Gets an owner by its id
    pub async fn get_by_id(&self, owner_id: i64) -> Result<Option<entity::owner::Model>, DbErr> {
        entity::prelude::Owner::find_by_id(owner_id)
            .one(self.conn)
            .await
    }

    /// Gets an owner by its exact name
    pub async fn get_by_name(
        &self,
        owner_name: &str,
    ) -> Result<Option<entity::owner::Model>, DbErr> {
        entity::prelude::Owner::find()
            .filter(entity::owner::Column::OwnerName.eq(owner_name))
            .one(self.conn)
            .await
    }

    /// Gets all owners
    pub async fn get_all(&self) -> Result<Vec<entity::owner::Model>, DbErr> {
        entity::prelude::Owner::find().all(self.conn).await
    }

    /// Gets every owner whose id is in the provided set, in one query
    pub async fn get_many_by_ids(
        &self,
        owner_ids: &[i64],
    ) -> Result<Vec<entity::owner::Model>, DbErr> {
        entity::prelude::Owner::find()
            .filter(entity::owner::Column::Id.is_in(owner_ids.iter().copied()))
            .all(self.conn)
            .await
    }

    /// Deletes an owner
    ///
    /// Returns OK regardless of the owner existing; to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, owner_id: i64) -> Result<DeleteResult, DbErr> {
        entity::prelude::Owner::delete_by_id(owner_id)
            .exec(self.conn)
            .await
    }
}
