use entity::sea_orm_active_enums::Position;

use super::*;
use crate::server::data::depth_chart::DepthChartRepository;

/// Expect a created row to be found by team and position
#[tokio::test]
async fn creates_and_finds_by_team_and_position() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_league_tables().build().await?;
    let (team, players) = test
        .league()
        .insert_team_with_roster("Reno", "Ravens", &[(Position::QB, 12), (Position::QB, 7)])
        .await?;

    let depth_repo = DepthChartRepository::new(&test.db);
    let created = depth_repo
        .create(team.id, Position::QB, Some(players[0].id), Some(players[1].id))
        .await?;
    let found = depth_repo
        .find_by_team_and_position(team.id, Position::QB)
        .await?;

    assert_eq!(found, Some(created));
    assert!(depth_repo
        .find_by_team_and_position(team.id, Position::K)
        .await?
        .is_none());

    Ok(())
}

/// Expect starter and backup to be replaced
#[tokio::test]
async fn updates_players() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_league_tables().build().await?;
    let (team, players) = test
        .league()
        .insert_team_with_roster("Reno", "Ravens", &[(Position::QB, 12), (Position::QB, 7)])
        .await?;
    let entry = test
        .league()
        .insert_depth_chart(team.id, Position::QB, Some(players[0].id), None)
        .await?;

    let depth_repo = DepthChartRepository::new(&test.db);
    let updated = depth_repo
        .update_players(entry, Some(players[1].id), Some(players[0].id))
        .await?;

    assert_eq!(updated.starter_player_id, Some(players[1].id));
    assert_eq!(updated.backup_player_id, Some(players[0].id));

    Ok(())
}

/// Expect an empty list for a team with no depth chart
#[tokio::test]
async fn get_by_team_is_empty_for_unknown_team() -> Result<(), TestError> {
    let test = TestBuilder::new().with_league_tables().build().await?;

    let depth_repo = DepthChartRepository::new(&test.db);
    let rows = depth_repo.get_by_team(42).await?;

    assert!(rows.is_empty());

    Ok(())
}

/// Expect deleting a starter to clear the reference
#[tokio::test]
async fn deleting_player_clears_reference() -> Result<(), TestError> {
    use sea_orm::EntityTrait;

    let mut test = TestBuilder::new().with_league_tables().build().await?;
    let (team, players) = test
        .league()
        .insert_team_with_roster("Reno", "Ravens", &[(Position::K, 3)])
        .await?;
    test.league()
        .insert_depth_chart(team.id, Position::K, Some(players[0].id), None)
        .await?;

    entity::prelude::Player::delete_by_id(players[0].id)
        .exec(&test.db)
        .await?;

    let depth_repo = DepthChartRepository::new(&test.db);
    let rows = depth_repo.get_by_team(team.id).await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].starter_player_id, None);

    Ok(())
}
