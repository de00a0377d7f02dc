use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_team::Team;

static IDX_GAME_RESULT_SEASON_WEEK: &str = "idx_game_result_season_week";
static FK_GAME_RESULT_HOME_TEAM_ID: &str = "fk_game_result_home_team_id";
static FK_GAME_RESULT_AWAY_TEAM_ID: &str = "fk_game_result_away_team_id";
static FK_GAME_RESULT_WINNER_TEAM_ID: &str = "fk_game_result_winner_team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameResult::Table)
                    .if_not_exists()
                    .col(pk_auto(GameResult::Id))
                    .col(integer(GameResult::Week))
                    .col(integer(GameResult::Season))
                    .col(integer(GameResult::HomeTeamId))
                    .col(integer(GameResult::AwayTeamId))
                    .col(integer_null(GameResult::WinnerTeamId))
                    .col(integer(GameResult::HomeScore).default(0))
                    .col(integer(GameResult::AwayScore).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_GAME_RESULT_HOME_TEAM_ID)
                            .from_tbl(GameResult::Table)
                            .from_col(GameResult::HomeTeamId)
                            .to_tbl(Team::Table)
                            .to_col(Team::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_GAME_RESULT_AWAY_TEAM_ID)
                            .from_tbl(GameResult::Table)
                            .from_col(GameResult::AwayTeamId)
                            .to_tbl(Team::Table)
                            .to_col(Team::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_GAME_RESULT_WINNER_TEAM_ID)
                            .from_tbl(GameResult::Table)
                            .from_col(GameResult::WinnerTeamId)
                            .to_tbl(Team::Table)
                            .to_col(Team::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GAME_RESULT_SEASON_WEEK)
                    .table(GameResult::Table)
                    .col(GameResult::Season)
                    .col(GameResult::Week)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GAME_RESULT_SEASON_WEEK)
                    .table(GameResult::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(GameResult::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum GameResult {
    Table,
    Id,
    Week,
    Season,
    HomeTeamId,
    AwayTeamId,
    WinnerTeamId,
    HomeScore,
    AwayScore,
}
