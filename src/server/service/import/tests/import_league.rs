use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;

/// Expect a full generated league to import with the expected counts
#[tokio::test]
async fn imports_default_league() -> Result<(), TestError> {
    let test = TestBuilder::new().with_league_tables().build().await?;
    let league = generate_league(123, &LeagueOptions::default());

    let service = ImportService::new(&test.db);
    let summary = service.import_league(&league, true).await.unwrap();

    assert_eq!(summary.created, 32 + 32 * 53 + 32 * 12);
    assert_eq!(entity::prelude::Player::find().count(&test.db).await?, 32 * 53);

    Ok(())
}

/// Expect validation failures not to be retried
#[tokio::test]
async fn import_league_returns_validation_errors() -> Result<(), TestError> {
    let test = TestBuilder::new().with_league_tables().build().await?;
    let mut league = small_league();
    league.teams[1].cap_space = -5;

    let service = ImportService::new(&test.db);
    let result = service.import_league(&league, true).await;

    assert!(matches!(result, Err(Error::ValidationError(_))));

    Ok(())
}

/// Expect an import without tables to fail with a database error
#[tokio::test]
async fn import_league_fails_without_tables() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let league = small_league();

    let service = ImportService::new(&test.db);
    let result = service.import_league(&league, true).await;

    assert!(matches!(result, Err(Error::DbErr(_))));

    Ok(())
}
