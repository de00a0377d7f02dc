//! League files through the importer and back out of the read API.

use axum::{extract::State, response::IntoResponse};
use franchise::{
    league::{
        export::{write_league, LeagueFormat},
        generate_league,
        load::read_league,
        LeagueOptions,
    },
    model::league::{DepthChartDto, PlayerDto},
    server::{
        controller::{depth_chart::get_depth_chart, player::get_players},
        service::{import::ImportService, verify::VerifyService},
    },
};
use franchise_test_utils::prelude::*;

use crate::util::{json_body, TestContextExt};

/// Expect a CSV league to import, verify and be served with matching jerseys
#[tokio::test]
async fn csv_league_round_trips_through_store() -> Result<(), TestError> {
    let test = TestBuilder::new().with_league_tables().build().await?;
    let dir = tempfile::tempdir().unwrap();

    let league = generate_league(
        123,
        &LeagueOptions {
            team_count: 3,
            free_agent_count: 5,
            ..LeagueOptions::default()
        },
    );
    write_league(dir.path(), &league, LeagueFormat::Csv).unwrap();
    let loaded = read_league(dir.path(), None).unwrap();
    assert_eq!(loaded, league);

    let summary = ImportService::new(&test.db)
        .import_league(&loaded, true)
        .await
        .unwrap();
    assert_eq!(summary.created, (3 + 3 * 53 + 5 + 3 * 12) as u64);

    let report = VerifyService::new(&test.db).verify().await.unwrap();
    assert!(report.is_valid());
    assert_eq!(report.players, 3 * 53 + 5);

    let resp = get_players(State(test.into_app_state()), axum::extract::Query(Default::default()))
        .await
        .unwrap()
        .into_response();
    let players: Vec<PlayerDto> = json_body(resp).await;
    assert_eq!(players.iter().filter(|p| p.team_id.is_none()).count(), 5);

    let resp = get_depth_chart(State(test.into_app_state()), axum::extract::Path(1))
        .await
        .unwrap()
        .into_response();
    let rows: Vec<DepthChartDto> = json_body(resp).await;
    assert_eq!(rows.len(), 12);

    let expected_starter = league.depth_chart[0].starter_jersey;
    let starter = players
        .iter()
        .find(|p| Some(p.id) == rows[0].starter_player_id)
        .unwrap();
    assert_eq!(starter.jersey, expected_starter);
    assert_eq!(starter.team_id, Some(1));

    Ok(())
}

/// Expect a JSON league imported twice to create nothing the second time
#[tokio::test]
async fn json_league_reimport_is_idempotent() -> Result<(), TestError> {
    let test = TestBuilder::new().with_league_tables().build().await?;
    let dir = tempfile::tempdir().unwrap();

    let league = generate_league(9, &LeagueOptions::default());
    write_league(dir.path(), &league, LeagueFormat::Json).unwrap();
    let loaded = read_league(dir.path(), Some(LeagueFormat::Json)).unwrap();

    let service = ImportService::new(&test.db);
    let first = service.import_league(&loaded, true).await.unwrap();
    let second = service.import_league(&loaded, true).await.unwrap();

    assert_eq!(first.created, 32 + 32 * 53 + 32 * 12);
    assert_eq!(second.created, 0);
    assert_eq!(second.updated, first.created);

    let skipped = service.import_league(&loaded, false).await.unwrap();
    assert_eq!(skipped.skipped, first.created);

    Ok(())
}
