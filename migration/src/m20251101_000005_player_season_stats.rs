use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000001_team::Team, m20251101_000002_player::Player};

static IDX_PLAYER_SEASON_STATS_KEY: &str = "idx_player_season_stats_season_team_id_player_id";
static FK_PLAYER_SEASON_STATS_TEAM_ID: &str = "fk_player_season_stats_team_id";
static FK_PLAYER_SEASON_STATS_PLAYER_ID: &str = "fk_player_season_stats_player_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerSeasonStats::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerSeasonStats::Id))
                    .col(integer(PlayerSeasonStats::Season))
                    .col(integer(PlayerSeasonStats::TeamId))
                    .col(integer(PlayerSeasonStats::PlayerId))
                    .col(integer(PlayerSeasonStats::Games).default(0))
                    .col(integer(PlayerSeasonStats::Snaps).default(0))
                    .col(integer(PlayerSeasonStats::PassAtt).default(0))
                    .col(integer(PlayerSeasonStats::PassCmp).default(0))
                    .col(integer(PlayerSeasonStats::PassYds).default(0))
                    .col(integer(PlayerSeasonStats::PassTd).default(0))
                    .col(integer(PlayerSeasonStats::PassInt).default(0))
                    .col(integer(PlayerSeasonStats::RushAtt).default(0))
                    .col(integer(PlayerSeasonStats::RushYds).default(0))
                    .col(integer(PlayerSeasonStats::RushTd).default(0))
                    .col(integer(PlayerSeasonStats::RecTgt).default(0))
                    .col(integer(PlayerSeasonStats::RecRec).default(0))
                    .col(integer(PlayerSeasonStats::RecYds).default(0))
                    .col(integer(PlayerSeasonStats::RecTd).default(0))
                    .col(integer(PlayerSeasonStats::DefTkl).default(0))
                    .col(integer(PlayerSeasonStats::DefSack).default(0))
                    .col(integer(PlayerSeasonStats::DefInt).default(0))
                    .col(integer(PlayerSeasonStats::StTkl).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PLAYER_SEASON_STATS_TEAM_ID)
                            .from_tbl(PlayerSeasonStats::Table)
                            .from_col(PlayerSeasonStats::TeamId)
                            .to_tbl(Team::Table)
                            .to_col(Team::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PLAYER_SEASON_STATS_PLAYER_ID)
                            .from_tbl(PlayerSeasonStats::Table)
                            .from_col(PlayerSeasonStats::PlayerId)
                            .to_tbl(Player::Table)
                            .to_col(Player::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLAYER_SEASON_STATS_KEY)
                    .table(PlayerSeasonStats::Table)
                    .col(PlayerSeasonStats::Season)
                    .col(PlayerSeasonStats::TeamId)
                    .col(PlayerSeasonStats::PlayerId)
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
                    .name(IDX_PLAYER_SEASON_STATS_KEY)
                    .table(PlayerSeasonStats::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PlayerSeasonStats::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum PlayerSeasonStats {
    Table,
    Id,
    Season,
    TeamId,
    PlayerId,
    Games,
    Snaps,
    PassAtt,
    PassCmp,
    PassYds,
    PassTd,
    PassInt,
    RushAtt,
    RushYds,
    RushTd,
    RecTgt,
    RecRec,
    RecYds,
    RecTd,
    DefTkl,
    DefSack,
    DefInt,
    StTkl,
}
