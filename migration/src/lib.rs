pub use sea_orm_migration::prelude::*;

mod m20251101_000001_team;
mod m20251101_000002_player;
mod m20251101_000003_depth_chart;
mod m20251101_000004_game_result;
mod m20251101_000005_player_season_stats;
mod m20251101_000006_user_profile;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_team::Migration),
            Box::new(m20251101_000002_player::Migration),
            Box::new(m20251101_000003_depth_chart::Migration),
            Box::new(m20251101_000004_game_result::Migration),
            Box::new(m20251101_000005_player_season_stats::Migration),
            Box::new(m20251101_000006_user_profile::Migration),
        ]
    }
}
