//! Test context returned by [`TestBuilder`](crate::TestBuilder).

use sea_orm::{
    sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection, DbBackend,
    Schema,
};

use crate::error::TestError;

/// Test environment holding a connection to an in-memory SQLite database.
///
/// ```ignore
/// let mut test = TestBuilder::new().with_league_tables().build().await?;
///
/// let team = test.league().insert_team("Reno", "Ravens").await?;
/// let app_state: AppState = test.to_app_state();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Convert the database connection into any type that can be constructed from it
    ///
    /// This allows conversion to AppState without creating a circular dependency
    /// between the test-utils crate and the main franchise crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }
}

impl TestContext {
    /// Connects to a fresh in-memory SQLite database with no tables.
    ///
    /// Foreign keys are switched on so cascade and set-null rules behave as they
    /// do after migrations.
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;
        db.execute_unprepared("PRAGMA foreign_keys = ON").await?;

        Ok(TestContext { db })
    }

    /// Executes CREATE TABLE statements in order.
    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}

/// CREATE TABLE statements for team, player and depth chart, in dependency order.
pub fn league_tables() -> Vec<TableCreateStatement> {
    let schema = Schema::new(DbBackend::Sqlite);

    vec![
        schema.create_table_from_entity(entity::prelude::Team),
        schema.create_table_from_entity(entity::prelude::Player),
        schema.create_table_from_entity(entity::prelude::DepthChart),
    ]
}

/// CREATE TABLE statements for every table in the schema, in dependency order.
pub fn all_tables() -> Vec<TableCreateStatement> {
    let schema = Schema::new(DbBackend::Sqlite);

    let mut stmts = league_tables();
    stmts.extend(vec![
        schema.create_table_from_entity(entity::prelude::GameResult),
        schema.create_table_from_entity(entity::prelude::PlayerSeasonStats),
        schema.create_table_from_entity(entity::prelude::UserProfile),
    ]);

    stmts
}
