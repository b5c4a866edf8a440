pub use sea_orm_migration::prelude::*;

mod m20260830_000001_create_owner_table;
mod m20260830_000002_create_ship_table;
mod m20260830_000003_create_ship_category_details_table;
mod m20260830_000004_create_ship_owner_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260830_000001_create_owner_table::Migration),
            Box::new(m20260830_000002_create_ship_table::Migration),
            Box::new(m20260830_000003_create_ship_category_details_table::Migration),
            Box::new(m20260830_000004_create_ship_owner_table::Migration),
        ]
    }
}
