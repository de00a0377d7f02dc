use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::HealthDto,
    server::{error::Error, model::app::AppState},
};

pub static HEALTH_TAG: &str = "health";

/// Report service status and version
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is running", body = HealthDto),
    ),
)]
pub async fn health(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    Ok((
        StatusCode::OK,
        Json(HealthDto {
            status: "ok".to_string(),
            version: state.version,
        }),
    ))
}
