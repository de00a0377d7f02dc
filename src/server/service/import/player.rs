use std::collections::HashMap;

use sea_orm::ConnectionTrait;

use super::{key::TeamKeyMap, validate::validate_player, ImportSummary};
use crate::{
    league::record::PlayerRecord,
    server::{
        data::player::{new_player, PlayerRepository},
        error::Error,
        model::db::PlayerModel,
    },
};

/// Phase 2: upserts players by (team, jersey); new rows are inserted in one flush
/// at the end so depth-chart resolution sees them.
///
/// A record repeating an earlier (team, jersey) of the same input is applied to
/// that earlier row like any other upsert, so the last record wins.
pub(super) async fn import_players<C: ConnectionTrait>(
    db: &C,
    players: &[PlayerRecord],
    key_map: &TeamKeyMap,
    upsert: bool,
    summary: &mut ImportSummary,
) -> Result<(), Error> {
    let player_repo = PlayerRepository::new(db);

    let mut existing: HashMap<(Option<i32>, i32), PlayerModel> = player_repo
        .get_by_team_ids_and_free_agents(&key_map.team_ids())
        .await?
        .into_iter()
        .map(|player| ((player.team_id, player.jersey), player))
        .collect();

    let mut pending = Vec::new();
    let mut pending_slots: HashMap<(Option<i32>, i32), usize> = HashMap::new();

    for player in players {
        validate_player(player)?;

        let team_id = key_map.resolve_player_team(&player.team_key)?;
        let key = (team_id, player.jersey);

        if let Some(&slot) = pending_slots.get(&key) {
            if upsert {
                pending[slot] = new_player(team_id, player);
                summary.updated += 1;
            } else {
                summary.skipped += 1;
            }
            continue;
        }

        match existing.get_mut(&key) {
            Some(current) if upsert => {
                tracing::debug!("Updating player {} #{}", player.full_name(), player.jersey);
                *current = player_repo.update_from_record(current.clone(), player).await?;
                summary.updated += 1;
            }
            Some(_) => {
                summary.skipped += 1;
            }
            None => {
                pending_slots.insert(key, pending.len());
                pending.push(new_player(team_id, player));
                summary.created += 1;
            }
        }
    }

    tracing::debug!("Flushing {} new players", pending.len());
    player_repo.create_many(pending).await?;

    Ok(())
}
