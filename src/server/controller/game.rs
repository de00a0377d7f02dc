use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{api::ErrorDto, league::GameResultDto},
    server::{data::game_result::GameResultRepository, error::Error, model::app::AppState},
};

pub static GAME_TAG: &str = "game";

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct GameQuery {
    /// Only return games from this season
    pub season: Option<i32>,
}

/// List game results ordered by id, optionally filtered by season
#[utoipa::path(
    get,
    path = "/games",
    tag = GAME_TAG,
    params(GameQuery),
    responses(
        (status = 200, description = "Success when listing games", body = Vec<GameResultDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_games(
    State(state): State<AppState>,
    Query(query): Query<GameQuery>,
) -> Result<impl IntoResponse, Error> {
    let game_repo = GameResultRepository::new(&state.db);

    let games: Vec<GameResultDto> = game_repo
        .get_all(query.season)
        .await?
        .into_iter()
        .map(GameResultDto::from)
        .collect();

    Ok((StatusCode::OK, Json(games)))
}
