use sea_orm::entity::prelude::*;

/// Raw per-season counters for one player on one team.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "player_season_stats")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub season: i32,
    pub team_id: i32,
    pub player_id: i32,
    pub games: i32,
    pub snaps: i32,
    pub pass_att: i32,
    pub pass_cmp: i32,
    pub pass_yds: i32,
    pub pass_td: i32,
    pub pass_int: i32,
    pub rush_att: i32,
    pub rush_yds: i32,
    pub rush_td: i32,
    pub rec_tgt: i32,
    pub rec_rec: i32,
    pub rec_yds: i32,
    pub rec_td: i32,
    pub def_tkl: i32,
    pub def_sack: i32,
    pub def_int: i32,
    pub st_tkl: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Team,
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerId",
        to = "super::player::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Player,
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
