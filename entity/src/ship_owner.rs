use sea_orm::entity::prelude::*;

/// Join table linking ships to their owners. This table is the single
/// authority for the ship-owner relationship; rows are only ever written
/// through the paired link/unlink repository operations.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ship_owner")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub ship_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub owner_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::ship::Entity",
        from = "Column::ShipId",
        to = "super::ship::Column::Id"
    )]
    Ship,
    #[sea_orm(
        belongs_to = "super::owner::Entity",
        from = "Column::OwnerId",
        to = "super::owner::Column::Id"
    )]
    Owner,
}

impl ActiveModelBehavior for ActiveModel {}
