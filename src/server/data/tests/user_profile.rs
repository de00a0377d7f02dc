use super::*;
use crate::server::data::user_profile::UserProfileRepository;

/// Expect a created profile to be found by id
#[tokio::test]
async fn creates_and_gets_profile() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let team = test.league().insert_team("Reno", "Ravens").await?;

    let profile_repo = UserProfileRepository::new(&test.db);
    let profile = profile_repo.create(" Coach ", Some(team.id)).await?;

    assert_eq!(profile.display_name, "Coach");
    assert_eq!(profile_repo.get_by_id(profile.id).await?, Some(profile));

    Ok(())
}

/// Expect the preferred team to be replaced
#[tokio::test]
async fn sets_preferred_team() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let team = test.league().insert_team("Reno", "Ravens").await?;
    let profile = test.league().insert_user_profile("Coach", None).await?;

    let profile_repo = UserProfileRepository::new(&test.db);
    let updated = profile_repo
        .set_preferred_team(profile.id, Some(team.id))
        .await?;

    assert_eq!(updated.unwrap().preferred_team_id, Some(team.id));

    Ok(())
}

/// Expect Ok(None) for an unknown profile
#[tokio::test]
async fn set_preferred_team_returns_none_for_unknown_profile() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let profile_repo = UserProfileRepository::new(&test.db);
    let result = profile_repo.set_preferred_team(1, None).await?;

    assert!(result.is_none());

    Ok(())
}

/// Expect deleting the preferred team to clear the reference
#[tokio::test]
async fn deleting_team_clears_preference() -> Result<(), TestError> {
    use sea_orm::EntityTrait;

    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let team = test.league().insert_team("Reno", "Ravens").await?;
    let profile = test.league().insert_user_profile("Coach", Some(team.id)).await?;

    entity::prelude::Team::delete_by_id(team.id)
        .exec(&test.db)
        .await?;

    let profile_repo = UserProfileRepository::new(&test.db);
    let found = profile_repo.get_by_id(profile.id).await?.unwrap();

    assert_eq!(found.preferred_team_id, None);

    Ok(())
}
