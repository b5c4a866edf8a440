use sea_orm::entity::prelude::*;

/// Optional category details for a ship, sharing the ship's primary key.
/// A row exists only while its ship exists.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ship_category_details")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub ship_id: i64,
    pub ship_type: Option<String>,
    pub ship_tonnage: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::ship::Entity",
        from = "Column::ShipId",
        to = "super::ship::Column::Id"
    )]
    Ship,
}

impl Related<super::ship::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ship.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
