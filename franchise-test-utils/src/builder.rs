//! Declarative test builder.
//!
//! Configuration methods are chained and queued; everything is executed in
//! order during the final `build()` call.

use entity::sea_orm_active_enums::Position;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{
    context::{all_tables, league_tables},
    error::TestError,
    TestContext,
};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_league_tables: bool,
    include_all_tables: bool,

    // (location_name, nickname, roster)
    teams: Vec<(String, String, Vec<(Position, i32)>)>,
    // (position, jersey)
    free_agents: Vec<(Position, i32)>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_league_tables: false,
            include_all_tables: false,
            teams: Vec::new(),
            free_agents: Vec::new(),
        }
    }

    /// Add the team, player and depth chart tables.
    pub fn with_league_tables(mut self) -> Self {
        self.include_league_tables = true;
        self
    }

    /// Add every table in the schema.
    pub fn with_all_tables(mut self) -> Self {
        self.include_all_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// ```no_run
    /// use franchise_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), franchise_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Team)
    ///     .with_table(UserProfile)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a team with no players.
    pub fn with_team(self, location_name: &str, nickname: &str) -> Self {
        self.with_team_roster(location_name, nickname, &[])
    }

    /// Insert a team with one player per `(position, jersey)` pair.
    pub fn with_team_roster(
        mut self,
        location_name: &str,
        nickname: &str,
        roster: &[(Position, i32)],
    ) -> Self {
        self.teams.push((
            location_name.to_string(),
            nickname.to_string(),
            roster.to_vec(),
        ));
        self
    }

    /// Insert a player with no team.
    pub fn with_free_agent(mut self, position: Position, jersey: i32) -> Self {
        self.free_agents.push((position, jersey));
        self
    }

    /// Creates the tables, then inserts teams, their rosters and free agents.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Configured test environment
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        let mut stmts = Vec::new();
        if self.include_all_tables {
            stmts.extend(all_tables());
        } else if self.include_league_tables {
            stmts.extend(league_tables());
        }
        stmts.extend(self.tables);
        setup.with_tables(stmts).await?;

        for (location_name, nickname, roster) in self.teams {
            setup
                .league()
                .insert_team_with_roster(&location_name, &nickname, &roster)
                .await?;
        }

        for (position, jersey) in self.free_agents {
            setup.league().insert_player(None, position, jersey).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{EntityTrait, PaginatorTrait};

    use super::*;

    #[tokio::test]
    async fn test_builder_creates_league_tables() {
        let result = TestBuilder::new().with_league_tables().build().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_builder_inserts_rosters() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_league_tables()
            .with_team_roster("Reno", "Ravens", &[(Position::QB, 12), (Position::K, 3)])
            .with_team("Tulsa", "Typhoon")
            .with_free_agent(Position::WR, 80)
            .build()
            .await?;

        assert_eq!(entity::prelude::Team::find().count(&test.db).await?, 2);
        assert_eq!(entity::prelude::Player::find().count(&test.db).await?, 3);

        Ok(())
    }
}
