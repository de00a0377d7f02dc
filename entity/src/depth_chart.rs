use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::Position;

/// Starter and backup assignment for one position on one team.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "depth_chart")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub team_id: i32,
    pub position: Position,
    pub starter_player_id: Option<i32>,
    pub backup_player_id: Option<i32>,
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
        from = "Column::StarterPlayerId",
        to = "super::player::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    StarterPlayer,
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::BackupPlayerId",
        to = "super::player::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    BackupPlayer,
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
