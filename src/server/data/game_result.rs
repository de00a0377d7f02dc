use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::{db::GameResultModel, game::NewGameResult};

pub struct GameResultRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GameResultRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a game result without checking the winner
    pub async fn create(&self, game: &NewGameResult) -> Result<GameResultModel, DbErr> {
        let game = entity::game_result::ActiveModel {
            week: ActiveValue::Set(game.week),
            season: ActiveValue::Set(game.season),
            home_team_id: ActiveValue::Set(game.home_team_id),
            away_team_id: ActiveValue::Set(game.away_team_id),
            winner_team_id: ActiveValue::Set(game.winner_team_id),
            home_score: ActiveValue::Set(game.home_score),
            away_score: ActiveValue::Set(game.away_score),
            ..Default::default()
        };

        game.insert(self.db).await
    }

    pub async fn update_winner(
        &self,
        existing: GameResultModel,
        winner_team_id: Option<i32>,
    ) -> Result<GameResultModel, DbErr> {
        let mut game_am = existing.into_active_model();
        game_am.winner_team_id = ActiveValue::Set(winner_team_id);

        game_am.update(self.db).await
    }

    pub async fn get_by_id(&self, game_id: i32) -> Result<Option<GameResultModel>, DbErr> {
        entity::prelude::GameResult::find_by_id(game_id)
            .one(self.db)
            .await
    }

    /// Returns games ordered by id, optionally only those in `season`
    pub async fn get_all(&self, season: Option<i32>) -> Result<Vec<GameResultModel>, DbErr> {
        let mut query = entity::prelude::GameResult::find();
        if let Some(season) = season {
            query = query.filter(entity::game_result::Column::Season.eq(season));
        }

        query
            .order_by_asc(entity::game_result::Column::Id)
            .all(self.db)
            .await
    }
}
