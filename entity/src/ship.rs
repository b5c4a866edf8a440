use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ship")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub ship_name: String,
    #[sea_orm(unique)]
    pub imo_number: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::ship_category_details::Entity")]
    ShipCategoryDetails,
}

impl Related<super::ship_category_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShipCategoryDetails.def()
    }
}

impl Related<super::owner::Entity> for Entity {
    fn to() -> RelationDef {
        super::ship_owner::Relation::Owner.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::ship_owner::Relation::Ship.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
