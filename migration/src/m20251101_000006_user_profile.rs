use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_team::Team;

static FK_USER_PROFILE_PREFERRED_TEAM_ID: &str = "fk_user_profile_preferred_team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserProfile::Table)
                    .if_not_exists()
                    .col(pk_auto(UserProfile::Id))
                    .col(string(UserProfile::DisplayName))
                    .col(integer_null(UserProfile::PreferredTeamId))
                    .col(timestamp(UserProfile::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_PROFILE_PREFERRED_TEAM_ID)
                            .from_tbl(UserProfile::Table)
                            .from_col(UserProfile::PreferredTeamId)
                            .to_tbl(Team::Table)
                            .to_col(Team::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserProfile::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UserProfile {
    Table,
    Id,
    DisplayName,
    PreferredTeamId,
    CreatedAt,
}
