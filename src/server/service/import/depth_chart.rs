use std::collections::{BTreeMap, HashMap};

use sea_orm::ConnectionTrait;

use super::{key::TeamKeyMap, ImportSummary};
use crate::{
    league::{check::DepthSlot, record::DepthChartRecord},
    server::{
        data::{depth_chart::DepthChartRepository, player::PlayerRepository},
        error::{resolution::ResolutionError, Error},
        model::db::PlayerModel,
        service::invariant::check_depth_chart_entry,
    },
};

/// Rosters by team id then jersey, loaded once per team.
type RosterCache = HashMap<i32, BTreeMap<i32, PlayerModel>>;

/// Phase 3: resolves jerseys to player ids and upserts rows by (team, position).
pub(super) async fn import_depth_chart<C: ConnectionTrait>(
    db: &C,
    rows: &[DepthChartRecord],
    key_map: &TeamKeyMap,
    upsert: bool,
    summary: &mut ImportSummary,
) -> Result<(), Error> {
    let player_repo = PlayerRepository::new(db);
    let depth_repo = DepthChartRepository::new(db);
    let mut rosters = RosterCache::new();

    for row in rows {
        let team_id = key_map.resolve_team(&row.team_key)?;

        if !rosters.contains_key(&team_id) {
            let roster = player_repo
                .get_all(Some(team_id))
                .await?
                .into_iter()
                .map(|player| (player.jersey, player))
                .collect();
            rosters.insert(team_id, roster);
        }
        let roster = &rosters[&team_id];

        let starter = resolve_jersey(roster, row, DepthSlot::Starter, row.starter_jersey)?;
        let backup = match row.backup_jersey {
            Some(jersey) => Some(resolve_jersey(roster, row, DepthSlot::Backup, jersey)?),
            None => None,
        };

        check_depth_chart_entry(team_id, row.position, Some(starter), backup)?;

        let starter_id = Some(starter.id);
        let backup_id = backup.map(|player| player.id);

        match depth_repo
            .find_by_team_and_position(team_id, row.position)
            .await?
        {
            Some(existing) if upsert => {
                tracing::debug!("Updating depth chart {} {}", row.team_key, row.position);
                depth_repo
                    .update_players(existing, starter_id, backup_id)
                    .await?;
                summary.updated += 1;
            }
            Some(_) => {
                summary.skipped += 1;
            }
            None => {
                depth_repo
                    .create(team_id, row.position, starter_id, backup_id)
                    .await?;
                summary.created += 1;
            }
        }
    }

    Ok(())
}

fn resolve_jersey<'r>(
    roster: &'r BTreeMap<i32, PlayerModel>,
    row: &DepthChartRecord,
    slot: DepthSlot,
    jersey: i32,
) -> Result<&'r PlayerModel, ResolutionError> {
    roster
        .get(&jersey)
        .ok_or_else(|| ResolutionError::JerseyNotFound {
            team_key: row.team_key.trim().to_string(),
            position: row.position,
            slot,
            jersey,
            available: roster.keys().copied().collect(),
        })
}
