use entity::sea_orm_active_enums::Position;
use franchise::{model::league::DepthChartDto, server::controller::depth_chart::get_depth_chart};

use super::*;

/// Expect 200 with the team's rows referencing player ids
#[tokio::test]
async fn gets_depth_chart() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_league_tables().build().await?;
    let (team, players) = test
        .league()
        .insert_team_with_roster("Reno", "Ravens", &[(Position::QB, 12), (Position::QB, 7)])
        .await?;
    test.league()
        .insert_depth_chart(team.id, Position::QB, Some(players[0].id), Some(players[1].id))
        .await?;

    let resp = get_depth_chart(State(test.into_app_state()), Path(team.id))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let rows: Vec<DepthChartDto> = json_body(resp).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].starter_player_id, Some(players[0].id));
    assert_eq!(rows[0].backup_player_id, Some(players[1].id));

    Ok(())
}

/// Expect 200 with an empty list for a team without a depth chart
#[tokio::test]
async fn empty_for_unknown_team() -> Result<(), TestError> {
    let test = TestBuilder::new().with_league_tables().build().await?;

    let resp = get_depth_chart(State(test.into_app_state()), Path(42))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let rows: Vec<DepthChartDto> = json_body(resp).await;
    assert!(rows.is_empty());

    Ok(())
}
