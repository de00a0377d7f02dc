use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_team::Team;

static IDX_PLAYER_TEAM_ID: &str = "idx_player_team_id";
static IDX_PLAYER_TEAM_JERSEY: &str = "idx_player_team_id_jersey";
static FK_PLAYER_TEAM_ID: &str = "fk_player_team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(pk_auto(Player::Id))
                    .col(integer_null(Player::TeamId))
                    .col(string(Player::FirstName))
                    .col(string(Player::LastName))
                    .col(string_len(Player::Position, 2))
                    .col(integer(Player::Jersey))
                    .col(integer(Player::Age))
                    .col(big_integer(Player::Salary).default(0))
                    .col(integer(Player::ContractYears).default(1))
                    .col(integer(Player::Speed).default(50))
                    .col(integer(Player::Strength).default(50))
                    .col(integer(Player::Agility).default(50))
                    .col(integer(Player::ThrowPower).default(50))
                    .col(integer(Player::ThrowAccuracy).default(50))
                    .col(integer(Player::Catching).default(50))
                    .col(integer(Player::Tackling).default(50))
                    .col(integer(Player::Awareness).default(50))
                    .col(integer(Player::Potential).default(50))
                    .col(integer(Player::Stamina).default(50))
                    .col(integer(Player::InjuryProneness).default(50))
                    .col(integer(Player::Morale).default(50))
                    // Declared inline, SQLite cannot add foreign keys to an existing table
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PLAYER_TEAM_ID)
                            .from_tbl(Player::Table)
                            .from_col(Player::TeamId)
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
                    .name(IDX_PLAYER_TEAM_ID)
                    .table(Player::Table)
                    .col(Player::TeamId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLAYER_TEAM_JERSEY)
                    .table(Player::Table)
                    .col(Player::TeamId)
                    .col(Player::Jersey)
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
                    .name(IDX_PLAYER_TEAM_JERSEY)
                    .table(Player::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLAYER_TEAM_ID)
                    .table(Player::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Player {
    Table,
    Id,
    TeamId,
    FirstName,
    LastName,
    Position,
    Jersey,
    Age,
    Salary,
    ContractYears,
    Speed,
    Strength,
    Agility,
    ThrowPower,
    ThrowAccuracy,
    Catching,
    Tackling,
    Awareness,
    Potential,
    Stamina,
    InjuryProneness,
    Morale,
}
