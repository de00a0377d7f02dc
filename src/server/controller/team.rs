use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, league::TeamDto},
    server::{data::team::TeamRepository, error::Error, model::app::AppState},
};

pub static TEAM_TAG: &str = "team";

/// List every team ordered by id
#[utoipa::path(
    get,
    path = "/teams",
    tag = TEAM_TAG,
    responses(
        (status = 200, description = "Success when listing teams", body = Vec<TeamDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teams(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let team_repo = TeamRepository::new(&state.db);

    let teams: Vec<TeamDto> = team_repo
        .get_all()
        .await?
        .into_iter()
        .map(TeamDto::from)
        .collect();

    Ok((StatusCode::OK, Json(teams)))
}

/// Get a single team by id
#[utoipa::path(
    get,
    path = "/teams/{team_id}",
    tag = TEAM_TAG,
    params(
        ("team_id" = i32, Path, description = "Team id")
    ),
    responses(
        (status = 200, description = "Success when retrieving team", body = TeamDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team(
    State(state): State<AppState>,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let team_repo = TeamRepository::new(&state.db);

    let Some(team) = team_repo.get_by_id(team_id).await? else {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: "team not found".to_string(),
            }),
        )
            .into_response());
    };

    Ok((StatusCode::OK, Json(TeamDto::from(team))).into_response())
}
