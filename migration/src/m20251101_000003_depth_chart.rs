use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000001_team::Team, m20251101_000002_player::Player};

static IDX_DEPTH_CHART_TEAM_POSITION: &str = "idx_depth_chart_team_id_position";
static FK_DEPTH_CHART_TEAM_ID: &str = "fk_depth_chart_team_id";
static FK_DEPTH_CHART_STARTER_PLAYER_ID: &str = "fk_depth_chart_starter_player_id";
static FK_DEPTH_CHART_BACKUP_PLAYER_ID: &str = "fk_depth_chart_backup_player_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DepthChart::Table)
                    .if_not_exists()
                    .col(pk_auto(DepthChart::Id))
                    .col(integer(DepthChart::TeamId))
                    .col(string_len(DepthChart::Position, 2))
                    .col(integer_null(DepthChart::StarterPlayerId))
                    .col(integer_null(DepthChart::BackupPlayerId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_DEPTH_CHART_TEAM_ID)
                            .from_tbl(DepthChart::Table)
                            .from_col(DepthChart::TeamId)
                            .to_tbl(Team::Table)
                            .to_col(Team::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_DEPTH_CHART_STARTER_PLAYER_ID)
                            .from_tbl(DepthChart::Table)
                            .from_col(DepthChart::StarterPlayerId)
                            .to_tbl(Player::Table)
                            .to_col(Player::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_DEPTH_CHART_BACKUP_PLAYER_ID)
                            .from_tbl(DepthChart::Table)
                            .from_col(DepthChart::BackupPlayerId)
                            .to_tbl(Player::Table)
                            .to_col(Player::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DEPTH_CHART_TEAM_POSITION)
                    .table(DepthChart::Table)
                    .col(DepthChart::TeamId)
                    .col(DepthChart::Position)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DEPTH_CHART_TEAM_POSITION)
                    .table(DepthChart::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DepthChart::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum DepthChart {
    Table,
    Id,
    TeamId,
    Position,
    StarterPlayerId,
    BackupPlayerId,
}
