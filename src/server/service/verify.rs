//! Post-import verification of the stored league.

use std::{collections::HashMap, fmt};

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{depth_chart::DepthChartRepository, player::PlayerRepository, team::TeamRepository},
    error::{resolution::ResolutionError, Error},
    model::db::{DepthChartModel, PlayerModel},
    service::invariant::check_depth_chart_entry,
};

/// Number of teams whose rosters are listed in a report.
const SAMPLE_TEAMS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSample {
    pub team_id: i32,
    pub team_key: String,
    /// Sorted jersey numbers on the team's roster.
    pub jerseys: Vec<i32>,
}

/// A stored depth-chart row that no longer satisfies the depth-chart invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDepthRow {
    pub depth_chart_id: i32,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyReport {
    pub teams: u64,
    pub players: u64,
    pub depth_chart_rows: u64,
    pub samples: Vec<TeamSample>,
    pub invalid_rows: Vec<InvalidDepthRow>,
}

impl VerifyReport {
    pub fn is_valid(&self) -> bool {
        self.invalid_rows.is_empty()
    }
}

impl fmt::Display for VerifyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Teams: {}", self.teams)?;
        writeln!(f, "Players: {}", self.players)?;
        writeln!(f, "Depth rows: {}", self.depth_chart_rows)?;

        for sample in &self.samples {
            writeln!(f)?;
            writeln!(f, "Team {} (id={})", sample.team_key, sample.team_id)?;
            writeln!(f, "  Roster size: {}", sample.jerseys.len())?;
            writeln!(f, "  Jerseys: {:?}", sample.jerseys)?;
        }

        writeln!(f)?;
        if self.invalid_rows.is_empty() {
            write!(f, "All depth chart rows reference players on their team")
        } else {
            writeln!(f, "Invalid depth chart rows: {}", self.invalid_rows.len())?;
            for row in &self.invalid_rows {
                writeln!(f, "  row {}: {}", row.depth_chart_id, row.reason)?;
            }
            Ok(())
        }
    }
}

pub struct VerifyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VerifyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts stored rows, samples the first teams' rosters and re-checks every
    /// depth-chart row against the players it references.
    pub async fn verify(&self) -> Result<VerifyReport, Error> {
        let team_repo = TeamRepository::new(self.db);
        let player_repo = PlayerRepository::new(self.db);
        let depth_repo = DepthChartRepository::new(self.db);

        let mut samples = Vec::new();
        for team in team_repo.get_all().await?.into_iter().take(SAMPLE_TEAMS) {
            samples.push(TeamSample {
                team_id: team.id,
                team_key: format!("{}|{}", team.location_name, team.nickname),
                jerseys: player_repo.get_jerseys_by_team(team.id).await?,
            });
        }

        let rows = depth_repo.get_all().await?;
        let player_ids: Vec<i32> = rows
            .iter()
            .flat_map(|row| [row.starter_player_id, row.backup_player_id])
            .flatten()
            .collect();
        let players: HashMap<i32, PlayerModel> = player_repo
            .get_by_ids(&player_ids)
            .await?
            .into_iter()
            .map(|player| (player.id, player))
            .collect();

        let invalid_rows: Vec<InvalidDepthRow> = rows
            .iter()
            .filter_map(|row| {
                check_row(row, &players).err().map(|reason| InvalidDepthRow {
                    depth_chart_id: row.id,
                    reason,
                })
            })
            .collect();

        if !invalid_rows.is_empty() {
            tracing::warn!("{} invalid depth chart rows", invalid_rows.len());
        }

        Ok(VerifyReport {
            teams: team_repo.count().await?,
            players: player_repo.count().await?,
            depth_chart_rows: rows.len() as u64,
            samples,
            invalid_rows,
        })
    }
}

fn check_row(row: &DepthChartModel, players: &HashMap<i32, PlayerModel>) -> Result<(), String> {
    let starter = lookup(players, row.starter_player_id)?;
    let backup = lookup(players, row.backup_player_id)?;
    if starter.is_none() {
        return Err(format!("team {} {} has no starter", row.team_id, row.position));
    }

    check_depth_chart_entry(row.team_id, row.position, starter, backup).map_err(|e| e.to_string())
}

fn lookup(
    players: &HashMap<i32, PlayerModel>,
    player_id: Option<i32>,
) -> Result<Option<&PlayerModel>, String> {
    match player_id {
        Some(id) => players
            .get(&id)
            .map(Some)
            .ok_or_else(|| ResolutionError::UnknownPlayer(id).to_string()),
        None => Ok(None),
    }
}
