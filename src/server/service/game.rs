//! Recording game results.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{game_result::GameResultRepository, team::TeamRepository},
    error::{resolution::ResolutionError, Error},
    model::{db::GameResultModel, game::NewGameResult},
    service::invariant::{check_game_result, check_winner},
};

pub struct GameService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and stores a finished game.
    ///
    /// # Returns
    /// - `Ok(GameResultModel)` - Game stored
    /// - `Err(Error::ValidationError)` - Week, season, scores, teams or winner invalid
    /// - `Err(Error::ResolutionError)` - Home or away team does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn record_result(&self, game: NewGameResult) -> Result<GameResultModel, Error> {
        check_game_result(&game)?;

        let team_repo = TeamRepository::new(self.db);
        for team_id in [game.home_team_id, game.away_team_id] {
            if team_repo.get_by_id(team_id).await?.is_none() {
                return Err(ResolutionError::UnknownTeamId(team_id).into());
            }
        }

        let game_repo = GameResultRepository::new(self.db);
        let model = game_repo.create(&game).await?;

        tracing::debug!(
            "Recorded season {} week {} game {}",
            model.season,
            model.week,
            model.id
        );

        Ok(model)
    }

    /// Replaces the winner of a stored game, `Ok(None)` if the game does not exist.
    pub async fn set_winner(
        &self,
        game_id: i32,
        winner_team_id: Option<i32>,
    ) -> Result<Option<GameResultModel>, Error> {
        let game_repo = GameResultRepository::new(self.db);

        let Some(game) = game_repo.get_by_id(game_id).await? else {
            return Ok(None);
        };

        check_winner(winner_team_id, game.home_team_id, game.away_team_id)?;

        Ok(Some(game_repo.update_winner(game, winner_team_id).await?))
    }
}
