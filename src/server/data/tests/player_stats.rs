use entity::sea_orm_active_enums::Position;

use super::*;
use crate::server::data::player_stats::{PlayerSeasonStatsRepository, StatLine};

/// Expect a new row to have every counter at zero
#[tokio::test]
async fn creates_zeroed_row() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let (team, players) = test
        .league()
        .insert_team_with_roster("Reno", "Ravens", &[(Position::QB, 12)])
        .await?;

    let stats_repo = PlayerSeasonStatsRepository::new(&test.db);
    let stats = stats_repo.create(2025, team.id, players[0].id).await?;

    assert_eq!(stats.season, 2025);
    assert_eq!(stats.games, 0);
    assert_eq!(stats.pass_yds, 0);
    assert_eq!(stats.st_tkl, 0);
    assert_eq!(
        stats_repo.find(2025, team.id, players[0].id).await?,
        Some(stats)
    );

    Ok(())
}

/// Expect counters to accumulate across calls
#[tokio::test]
async fn adds_counters() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let (team, players) = test
        .league()
        .insert_team_with_roster("Reno", "Ravens", &[(Position::QB, 12)])
        .await?;
    let stats = test
        .league()
        .insert_season_stats(2025, team.id, players[0].id)
        .await?;

    let line = StatLine {
        games: 1,
        pass_att: 30,
        pass_cmp: 21,
        pass_yds: 254,
        pass_td: 2,
        ..StatLine::default()
    };

    let stats_repo = PlayerSeasonStatsRepository::new(&test.db);
    stats_repo.add(stats.id, &line).await?;
    let updated = stats_repo.add(stats.id, &line).await?.unwrap();

    assert_eq!(updated.games, 2);
    assert_eq!(updated.pass_att, 60);
    assert_eq!(updated.pass_yds, 508);
    assert_eq!(updated.rush_att, 0);

    Ok(())
}

/// Expect Ok(None) when adding to an unknown row
#[tokio::test]
async fn add_returns_none_for_unknown_row() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let stats_repo = PlayerSeasonStatsRepository::new(&test.db);
    let result = stats_repo.add(1, &StatLine::default()).await?;

    assert!(result.is_none());

    Ok(())
}

/// Expect rows ordered by season
#[tokio::test]
async fn gets_rows_by_player() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let (team, players) = test
        .league()
        .insert_team_with_roster("Reno", "Ravens", &[(Position::QB, 12)])
        .await?;
    test.league()
        .insert_season_stats(2025, team.id, players[0].id)
        .await?;
    test.league()
        .insert_season_stats(2024, team.id, players[0].id)
        .await?;

    let stats_repo = PlayerSeasonStatsRepository::new(&test.db);
    let rows = stats_repo.get_by_player(players[0].id).await?;

    let seasons: Vec<i32> = rows.iter().map(|r| r.season).collect();
    assert_eq!(seasons, vec![2024, 2025]);

    Ok(())
}
