use sea_orm_migration::prelude::*;

use crate::m20260830_000002_create_ship_table::Ship;

static FK_SHIP_CATEGORY_DETAILS_SHIP_ID: &str = "fk_ship_category_details_ship_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShipCategoryDetails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ShipCategoryDetails::ShipId)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ShipCategoryDetails::ShipType).string())
                    .col(ColumnDef::new(ShipCategoryDetails::ShipTonnage).integer())
                    .to_owned(),
            )
            .await?;

        // Details share the ship's primary key and cannot outlive it.
        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SHIP_CATEGORY_DETAILS_SHIP_ID)
                    .from_tbl(ShipCategoryDetails::Table)
                    .from_col(ShipCategoryDetails::ShipId)
                    .to_tbl(Ship::Table)
                    .to_col(Ship::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SHIP_CATEGORY_DETAILS_SHIP_ID)
                    .table(ShipCategoryDetails::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ShipCategoryDetails::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ShipCategoryDetails {
    Table,
    ShipId,
    ShipType,
    ShipTonnage,
}
