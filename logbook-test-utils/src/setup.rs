//! Test environment setup.
//!
//! Provides an in-memory SQLite database with the registry tables created
//! from the entity definitions, so repository and service tests run without
//! an external database.

use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbBackend, Schema};

use crate::error::TestError;

/// Test context holding the connection used across a single test.
pub struct TestContext {
    /// Connection to an in-memory SQLite database.
    pub db: DatabaseConnection,
}

/// Returns a [`TestContext`] with all registry tables created.
pub async fn test_setup() -> Result<TestContext, TestError> {
    let test = test_setup_without_tables().await?;

    let schema = Schema::new(DbBackend::Sqlite);
    let stmts = vec![
        schema.create_table_from_entity(entity::prelude::Owner),
        schema.create_table_from_entity(entity::prelude::Ship),
        schema.create_table_from_entity(entity::prelude::ShipCategoryDetails),
        schema.create_table_from_entity(entity::prelude::ShipOwner),
    ];

    for stmt in stmts {
        test.db.execute(&stmt).await?;
    }

    Ok(test)
}

/// Returns a [`TestContext`] without creating any tables, used by tests that
/// expect database errors.
pub async fn test_setup_without_tables() -> Result<TestContext, TestError> {
    let db = Database::connect("sqlite::memory:").await?;

    Ok(TestContext { db })
}
