use entity::sea_orm_active_enums::Position;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::db::DepthChartModel;

pub struct DepthChartRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DepthChartRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a depth chart row
    ///
    /// Callers are responsible for checking that both players belong to `team_id`.
    pub async fn create(
        &self,
        team_id: i32,
        position: Position,
        starter_player_id: Option<i32>,
        backup_player_id: Option<i32>,
    ) -> Result<DepthChartModel, DbErr> {
        let entry = entity::depth_chart::ActiveModel {
            team_id: ActiveValue::Set(team_id),
            position: ActiveValue::Set(position),
            starter_player_id: ActiveValue::Set(starter_player_id),
            backup_player_id: ActiveValue::Set(backup_player_id),
            ..Default::default()
        };

        entry.insert(self.db).await
    }

    /// Replaces the starter and backup of an existing row
    pub async fn update_players(
        &self,
        existing: DepthChartModel,
        starter_player_id: Option<i32>,
        backup_player_id: Option<i32>,
    ) -> Result<DepthChartModel, DbErr> {
        let mut entry_am = existing.into_active_model();
        entry_am.starter_player_id = ActiveValue::Set(starter_player_id);
        entry_am.backup_player_id = ActiveValue::Set(backup_player_id);

        entry_am.update(self.db).await
    }

    pub async fn find_by_team_and_position(
        &self,
        team_id: i32,
        position: Position,
    ) -> Result<Option<DepthChartModel>, DbErr> {
        entity::prelude::DepthChart::find()
            .filter(entity::depth_chart::Column::TeamId.eq(team_id))
            .filter(entity::depth_chart::Column::Position.eq(position))
            .one(self.db)
            .await
    }

    /// Returns a team's rows ordered by id, empty for an unknown team
    pub async fn get_by_team(&self, team_id: i32) -> Result<Vec<DepthChartModel>, DbErr> {
        entity::prelude::DepthChart::find()
            .filter(entity::depth_chart::Column::TeamId.eq(team_id))
            .order_by_asc(entity::depth_chart::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<DepthChartModel>, DbErr> {
        entity::prelude::DepthChart::find()
            .order_by_asc(entity::depth_chart::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::DepthChart::find().count(self.db).await
    }
}
