use franchise::{
    model::league::GameResultDto,
    server::controller::game::{get_games, GameQuery},
};

use super::*;

/// Expect the season filter to restrict results
#[tokio::test]
async fn lists_games_with_optional_season_filter() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let home = test.league().insert_team("Reno", "Ravens").await?;
    let away = test.league().insert_team("Tulsa", "Typhoon").await?;
    test.league()
        .insert_game(2024, 17, home.id, away.id, Some(away.id))
        .await?;
    test.league()
        .insert_game(2025, 1, away.id, home.id, None)
        .await?;

    let resp = get_games(
        State(test.into_app_state()),
        Query(GameQuery { season: Some(2024) }),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let games: Vec<GameResultDto> = json_body(resp).await;
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].week, 17);
    assert_eq!(games[0].winner_team_id, Some(away.id));

    let resp = get_games(State(test.into_app_state()), Query(GameQuery::default()))
        .await
        .unwrap()
        .into_response();
    let games: Vec<GameResultDto> = json_body(resp).await;
    assert_eq!(games.len(), 2);

    Ok(())
}
