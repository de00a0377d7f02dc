use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::Position;

/// A rostered player or, when `team_id` is `None`, a free agent.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub team_id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub position: Position,
    pub jersey: i32,
    pub age: i32,
    pub salary: i64,
    pub contract_years: i32,
    pub speed: i32,
    pub strength: i32,
    pub agility: i32,
    pub throw_power: i32,
    pub throw_accuracy: i32,
    pub catching: i32,
    pub tackling: i32,
    pub awareness: i32,
    pub potential: i32,
    pub stamina: i32,
    pub injury_proneness: i32,
    pub morale: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Team,
    #[sea_orm(has_many = "super::player_season_stats::Entity")]
    PlayerSeasonStats,
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<super::player_season_stats::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerSeasonStats.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
