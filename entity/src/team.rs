use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::{Conference, Division};

/// A franchise, identified by its (location_name, nickname) pair.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "team")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub location_name: String,
    pub nickname: String,
    pub conference: Conference,
    pub division: Division,
    /// Between 0 and 100.
    pub power_rating: i32,
    pub cap_space: i64,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::player::Entity")]
    Player,
    #[sea_orm(has_many = "super::depth_chart::Entity")]
    DepthChart,
    #[sea_orm(has_many = "super::player_season_stats::Entity")]
    PlayerSeasonStats,
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl Related<super::depth_chart::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DepthChart.def()
    }
}

impl Related<super::player_season_stats::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerSeasonStats.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
