use sea_orm::ConnectionTrait;

use super::{key::TeamKeyMap, validate::validate_team, ImportSummary};
use crate::{
    league::record::TeamRecord,
    server::{data::team::TeamRepository, error::Error},
};

/// Phase 1: upserts teams by natural key and records every key's id.
pub(super) async fn import_teams<C: ConnectionTrait>(
    db: &C,
    teams: &[TeamRecord],
    upsert: bool,
    summary: &mut ImportSummary,
) -> Result<TeamKeyMap, Error> {
    let team_repo = TeamRepository::new(db);
    let mut key_map = TeamKeyMap::new();

    for team in teams {
        validate_team(team)?;

        let key = team.key();
        let team_id = match team_repo.find_by_key(&key).await? {
            Some(existing) if upsert => {
                tracing::debug!("Updating team {}", key);
                summary.updated += 1;
                team_repo.update_attributes(existing, team).await?.id
            }
            Some(existing) => {
                tracing::debug!("Skipping existing team {}", key);
                summary.skipped += 1;
                existing.id
            }
            None => {
                tracing::debug!("Creating team {}", key);
                summary.created += 1;
                team_repo.create(team).await?.id
            }
        };

        key_map.insert(key, team_id);
    }

    Ok(key_map)
}
