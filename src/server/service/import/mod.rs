//! Bulk import of league records into the store.
//!
//! An import runs three ordered phases inside one transaction: teams, players,
//! then depth chart. Each phase upserts by natural key, so re-applying the same
//! input with `upsert = true` creates nothing and leaves values unchanged. Any
//! validation or resolution failure rolls the whole import back.

mod depth_chart;
mod key;
mod player;
mod team;
mod validate;

#[cfg(test)]
mod tests;

use std::fmt;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    league::record::{DepthChartRecord, League, PlayerRecord, TeamRecord},
    server::{error::Error, service::retry::RetryContext},
};

pub use key::TeamKeyMap;
pub use validate::{validate_player, validate_team};

/// Row counts across all three phases of one import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub created: u64,
    pub updated: u64,
    pub skipped: u64,
}

impl fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "created: {}, updated: {}, skipped: {}",
            self.created, self.updated, self.skipped
        )
    }
}

pub struct ImportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ImportService<'a> {
    /// Creates a new instance of [`ImportService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Imports teams, players and depth-chart rows as a single transaction.
    ///
    /// # Arguments
    /// - `teams` - Teams keyed by trimmed (location name, nickname)
    /// - `players` - Players keyed by (team, jersey); `FA|FA` marks a free agent
    /// - `depth_chart` - Rows keyed by (team, position) referencing jerseys
    /// - `upsert` - Overwrite existing rows when true, skip them when false
    ///
    /// # Returns
    /// - `Ok(ImportSummary)` - Import committed
    /// - `Err(Error::ValidationError)` - A record failed a field or cross-entity check
    /// - `Err(Error::ResolutionError)` - A team key or jersey could not be resolved
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn import_roster(
        &self,
        teams: &[TeamRecord],
        players: &[PlayerRecord],
        depth_chart: &[DepthChartRecord],
        upsert: bool,
    ) -> Result<ImportSummary, Error> {
        let txn = self.db.begin().await?;
        let mut summary = ImportSummary::default();

        let result = async {
            let key_map = team::import_teams(&txn, teams, upsert, &mut summary).await?;
            tracing::info!("Imported {} teams ({})", key_map.len(), summary);

            player::import_players(&txn, players, &key_map, upsert, &mut summary).await?;
            tracing::info!("Imported {} players ({})", players.len(), summary);

            depth_chart::import_depth_chart(&txn, depth_chart, &key_map, upsert, &mut summary)
                .await?;
            tracing::info!("Imported {} depth chart rows ({})", depth_chart.len(), summary);

            Ok::<(), Error>(())
        }
        .await;

        match result {
            Ok(()) => {
                txn.commit().await?;

                Ok(summary)
            }
            Err(err) => {
                tracing::warn!("Rolling back import: {}", err);
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Failed to roll back import: {}", rollback_err);
                }

                Err(err)
            }
        }
    }

    /// Imports a whole league, retrying transient database failures.
    pub async fn import_league(&self, league: &League, upsert: bool) -> Result<ImportSummary, Error> {
        let ctx = RetryContext::new();

        ctx.execute_with_retry("league import", || {
            self.import_roster(&league.teams, &league.players, &league.depth_chart, upsert)
        })
        .await
    }
}
