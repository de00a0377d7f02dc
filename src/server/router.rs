//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered with its utoipa specification, and Swagger UI is
//! served at `/api/docs` with the OpenAPI document at `/api/docs/openapi.json`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the read API router with Swagger UI.
///
/// # Registered Endpoints
/// - `GET /health` - Service status and version
/// - `GET /teams` - All teams
/// - `GET /teams/{team_id}` - One team
/// - `GET /players?team_id=` - Players, optionally for one team
/// - `GET /players/{player_id}` - One player
/// - `GET /depth-chart/{team_id}` - A team's depth chart
/// - `GET /games?season=` - Game results, optionally for one season
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Franchise", description = "Franchise roster API"), tags(
        (name = controller::health::HEALTH_TAG, description = "Service health"),
        (name = controller::team::TEAM_TAG, description = "Team API routes"),
        (name = controller::player::PLAYER_TAG, description = "Player API routes"),
        (name = controller::depth_chart::DEPTH_CHART_TAG, description = "Depth chart API routes"),
        (name = controller::game::GAME_TAG, description = "Game result API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::health::health))
        .routes(routes!(controller::team::get_teams))
        .routes(routes!(controller::team::get_team))
        .routes(routes!(controller::player::get_players))
        .routes(routes!(controller::player::get_player))
        .routes(routes!(controller::depth_chart::get_depth_chart))
        .routes(routes!(controller::game::get_games))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
