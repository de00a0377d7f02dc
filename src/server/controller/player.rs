use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{api::ErrorDto, league::PlayerDto},
    server::{data::player::PlayerRepository, error::Error, model::app::AppState},
};

pub static PLAYER_TAG: &str = "player";

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct PlayerQuery {
    /// Only return players on this team
    pub team_id: Option<i32>,
}

/// List players ordered by id, optionally filtered by team
#[utoipa::path(
    get,
    path = "/players",
    tag = PLAYER_TAG,
    params(PlayerQuery),
    responses(
        (status = 200, description = "Success when listing players", body = Vec<PlayerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_players(
    State(state): State<AppState>,
    Query(query): Query<PlayerQuery>,
) -> Result<impl IntoResponse, Error> {
    let player_repo = PlayerRepository::new(&state.db);

    let players: Vec<PlayerDto> = player_repo
        .get_all(query.team_id)
        .await?
        .into_iter()
        .map(PlayerDto::from)
        .collect();

    Ok((StatusCode::OK, Json(players)))
}

/// Get a single player by id
#[utoipa::path(
    get,
    path = "/players/{player_id}",
    tag = PLAYER_TAG,
    params(
        ("player_id" = i32, Path, description = "Player id")
    ),
    responses(
        (status = 200, description = "Success when retrieving player", body = PlayerDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_player(
    State(state): State<AppState>,
    Path(player_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let player_repo = PlayerRepository::new(&state.db);

    let Some(player) = player_repo.get_by_id(player_id).await? else {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: "player not found".to_string(),
            }),
        )
            .into_response());
    };

    Ok((StatusCode::OK, Json(PlayerDto::from(player))).into_response())
}
