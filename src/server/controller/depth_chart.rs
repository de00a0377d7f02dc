use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, league::DepthChartDto},
    server::{data::depth_chart::DepthChartRepository, error::Error, model::app::AppState},
};

pub static DEPTH_CHART_TAG: &str = "depth-chart";

/// Get a team's depth chart, empty when the team has none
#[utoipa::path(
    get,
    path = "/depth-chart/{team_id}",
    tag = DEPTH_CHART_TAG,
    params(
        ("team_id" = i32, Path, description = "Team id")
    ),
    responses(
        (status = 200, description = "Success when retrieving depth chart", body = Vec<DepthChartDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_depth_chart(
    State(state): State<AppState>,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let depth_repo = DepthChartRepository::new(&state.db);

    let rows: Vec<DepthChartDto> = depth_repo
        .get_by_team(team_id)
        .await?
        .into_iter()
        .map(DepthChartDto::from)
        .collect();

    Ok((StatusCode::OK, Json(rows)))
}
