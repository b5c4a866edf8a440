use sea_orm_migration::prelude::*;

use crate::{
    m20260830_000001_create_owner_table::Owner, m20260830_000002_create_ship_table::Ship,
};

static FK_SHIP_OWNER_SHIP_ID: &str = "fk_ship_owner_ship_id";
static FK_SHIP_OWNER_OWNER_ID: &str = "fk_ship_owner_owner_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShipOwner::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ShipOwner::ShipId).big_integer().not_null())
                    .col(ColumnDef::new(ShipOwner::OwnerId).big_integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(ShipOwner::ShipId)
                            .col(ShipOwner::OwnerId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SHIP_OWNER_SHIP_ID)
                    .from_tbl(ShipOwner::Table)
                    .from_col(ShipOwner::ShipId)
                    .to_tbl(Ship::Table)
                    .to_col(Ship::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SHIP_OWNER_OWNER_ID)
                    .from_tbl(ShipOwner::Table)
                    .from_col(ShipOwner::OwnerId)
                    .to_tbl(Owner::Table)
                    .to_col(Owner::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SHIP_OWNER_SHIP_ID)
                    .table(ShipOwner::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SHIP_OWNER_OWNER_ID)
                    .table(ShipOwner::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ShipOwner::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ShipOwner {
    Table,
    ShipId,
    OwnerId,
}
