use entity::sea_orm_active_enums::Position;
use franchise::{
    model::{api::ErrorDto, league::PlayerDto},
    server::controller::player::{get_player, get_players, PlayerQuery},
};

use super::*;

/// Expect the team filter to restrict results and no filter to include free agents
#[tokio::test]
async fn lists_players_with_optional_team_filter() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_league_tables()
        .with_team_roster("Tulsa", "Typhoon", &[(Position::QB, 1)])
        .with_free_agent(Position::K, 4)
        .build()
        .await?;
    let (team, _) = test
        .league()
        .insert_team_with_roster("Reno", "Ravens", &[(Position::QB, 12), (Position::RB, 22)])
        .await?;

    let resp = get_players(
        State(test.into_app_state()),
        Query(PlayerQuery {
            team_id: Some(team.id),
        }),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let players: Vec<PlayerDto> = json_body(resp).await;
    assert_eq!(players.len(), 2);
    assert!(players.iter().all(|p| p.team_id == Some(team.id)));

    let resp = get_players(State(test.into_app_state()), Query(PlayerQuery::default()))
        .await
        .unwrap()
        .into_response();
    let players: Vec<PlayerDto> = json_body(resp).await;
    assert_eq!(players.len(), 4);
    assert!(players.windows(2).all(|w| w[0].id < w[1].id));

    Ok(())
}

/// Expect 200 with the requested player including ratings
#[tokio::test]
async fn gets_player() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_league_tables().build().await?;
    let player = test.league().insert_player(None, Position::WR, 81).await?;

    let resp = get_player(State(test.into_app_state()), Path(player.id))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let dto: PlayerDto = json_body(resp).await;
    assert_eq!(dto.jersey, 81);
    assert_eq!(dto.team_id, None);
    assert_eq!(dto.morale, 50);

    Ok(())
}

/// Expect 404 with "player not found" for an unknown id
#[tokio::test]
async fn player_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_league_tables().build().await?;

    let resp = get_player(State(test.into_app_state()), Path(1))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.error, "player not found");

    Ok(())
}
