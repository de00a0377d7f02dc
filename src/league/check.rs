//! Offline consistency check between a league's depth chart and its rosters.

use std::{
    collections::{HashMap, HashSet},
    fmt,
};

use entity::sea_orm_active_enums::Position;

use crate::league::record::{League, TeamKey};

/// Which depth-chart slot a mismatch was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthSlot {
    Starter,
    Backup,
}

impl DepthSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Starter => "starter",
            Self::Backup => "backup",
        }
    }
}

impl fmt::Display for DepthSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A depth-chart jersey with no matching player on the same team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthChartMismatch {
    pub team_key: String,
    pub position: Position,
    pub slot: DepthSlot,
    pub jersey: i32,
}

impl fmt::Display for DepthChartMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {} jersey {} not found in players for that team",
            self.team_key,
            self.position,
            self.slot,
            self.jersey
        )
    }
}

/// Lists every depth-chart jersey that is missing from its team's roster.
///
/// Team keys are compared after trimming, so padded keys still match.
pub fn check_depth_chart(league: &League) -> Vec<DepthChartMismatch> {
    let mut rosters: HashMap<TeamKey, HashSet<i32>> = HashMap::new();
    for player in &league.players {
        if let Some(key) = TeamKey::parse(&player.team_key) {
            rosters.entry(key).or_default().insert(player.jersey);
        }
    }

    let empty = HashSet::new();
    let mut mismatches = Vec::new();

    for row in &league.depth_chart {
        let roster = TeamKey::parse(&row.team_key)
            .and_then(|key| rosters.get(&key))
            .unwrap_or(&empty);

        let slots = [
            (DepthSlot::Starter, Some(row.starter_jersey)),
            (DepthSlot::Backup, row.backup_jersey),
        ];

        for (slot, jersey) in slots {
            if let Some(jersey) = jersey {
                if !roster.contains(&jersey) {
                    mismatches.push(DepthChartMismatch {
                        team_key: row.team_key.clone(),
                        position: row.position,
                        slot,
                        jersey,
                    });
                }
            }
        }
    }

    mismatches
}
