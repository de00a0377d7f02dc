use sea_orm_migration::{prelude::*, schema::*};

static IDX_TEAM_NATURAL_KEY: &str = "idx_team_location_name_nickname";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Team::Table)
                    .if_not_exists()
                    .col(pk_auto(Team::Id))
                    .col(string(Team::LocationName))
                    .col(string(Team::Nickname))
                    .col(string_len(Team::Conference, 3))
                    .col(string_len(Team::Division, 5))
                    .col(integer(Team::PowerRating).default(50))
                    .col(big_integer(Team::CapSpace).default(0))
                    .col(timestamp(Team::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TEAM_NATURAL_KEY)
                    .table(Team::Table)
                    .col(Team::LocationName)
                    .col(Team::Nickname)
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
                    .name(IDX_TEAM_NATURAL_KEY)
                    .table(Team::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Team {
    Table,
    Id,
    LocationName,
    Nickname,
    Conference,
    Division,
    PowerRating,
    CapSpace,
    CreatedAt,
}
