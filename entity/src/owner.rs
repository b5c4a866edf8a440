use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "owner")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub owner_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::ship::Entity> for Entity {
    fn to() -> RelationDef {
        super::ship_owner::Relation::Ship.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::ship_owner::Relation::Owner.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
