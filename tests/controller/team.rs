use franchise::{
    model::{api::ErrorDto, league::TeamDto},
    server::controller::team::{get_team, get_teams},
};

use super::*;

/// Expect 200 with every team in id order
#[tokio::test]
async fn lists_teams() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .with_team("Reno", "Ravens")
        .with_team("Tulsa", "Typhoon")
        .build()
        .await?;

    let resp = get_teams(State(test.into_app_state()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let teams: Vec<TeamDto> = json_body(resp).await;
    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0].location_name, "Reno");
    assert_eq!(teams[1].nickname, "Typhoon");

    Ok(())
}

/// Expect 200 with an empty list when no teams exist
#[tokio::test]
async fn lists_no_teams() -> Result<(), TestError> {
    let test = TestBuilder::new().with_league_tables().build().await?;

    let resp = get_teams(State(test.into_app_state()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let teams: Vec<TeamDto> = json_body(resp).await;
    assert!(teams.is_empty());

    Ok(())
}

/// Expect 200 with the requested team
#[tokio::test]
async fn gets_team() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_league_tables().build().await?;
    let team = test.league().insert_team("Reno", "Ravens").await?;

    let resp = get_team(State(test.into_app_state()), Path(team.id))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let dto: TeamDto = json_body(resp).await;
    assert_eq!(dto, TeamDto::from(team));

    Ok(())
}

/// Expect 404 with "team not found" for an unknown id
#[tokio::test]
async fn team_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_league_tables().build().await?;

    let resp = get_team(State(test.into_app_state()), Path(99))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.error, "team not found");

    Ok(())
}

/// Expect 500 when required tables are missing
#[tokio::test]
async fn internal_error_without_tables() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_teams(State(test.into_app_state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
