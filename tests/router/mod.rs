//! Requests routed through the full axum router.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use franchise::{model::league::TeamDto, server::router::routes};
use franchise_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::{json_body, TestContextExt};

async fn get(test: &TestContext, uri: &str) -> axum::response::Response {
    routes()
        .with_state(test.into_app_state())
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Expect the health route to respond 200
#[tokio::test]
async fn routes_health() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = get(&test, "/health").await;

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect path parameters to reach the team handler
#[tokio::test]
async fn routes_team_by_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .with_team("Reno", "Ravens")
        .build()
        .await?;

    let resp = get(&test, "/teams/1").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let team: TeamDto = json_body(resp).await;
    assert_eq!(team.nickname, "Ravens");

    let resp = get(&test, "/teams/2").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect query parameters to reach the player handler
#[tokio::test]
async fn routes_player_filter() -> Result<(), TestError> {
    let test = TestBuilder::new().with_league_tables().build().await?;

    let resp = get(&test, "/players?team_id=1").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = get(&test, "/players?team_id=abc").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect the OpenAPI document to list every read endpoint
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = get(&test, "/api/docs/openapi.json").await;

    assert_eq!(resp.status(), StatusCode::OK);
    let doc: serde_json::Value = json_body(resp).await;
    let paths = doc["paths"].as_object().unwrap();
    for path in [
        "/health",
        "/teams",
        "/teams/{team_id}",
        "/players",
        "/players/{player_id}",
        "/depth-chart/{team_id}",
        "/games",
    ] {
        assert!(paths.contains_key(path), "missing {path}");
    }

    Ok(())
}
