use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "game_result")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub week: i32,
    pub season: i32,
    pub home_team_id: i32,
    pub away_team_id: i32,
    /// Either `home_team_id` or `away_team_id` when set.
    pub winner_team_id: Option<i32>,
    pub home_score: i32,
    pub away_score: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::HomeTeamId",
        to = "super::team::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    HomeTeam,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::AwayTeamId",
        to = "super::team::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    AwayTeam,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::WinnerTeamId",
        to = "super::team::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    WinnerTeam,
}

impl ActiveModelBehavior for ActiveModel {}
