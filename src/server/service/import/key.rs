use std::collections::HashMap;

use crate::{league::record::TeamKey, server::error::resolution::ResolutionError};

/// Maps team natural keys to the ids they were persisted under during one import.
#[derive(Debug, Default)]
pub struct TeamKeyMap {
    ids: HashMap<TeamKey, i32>,
}

impl TeamKeyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: TeamKey, team_id: i32) {
        self.ids.insert(key, team_id);
    }

    pub fn get(&self, key: &TeamKey) -> Option<i32> {
        self.ids.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn team_ids(&self) -> Vec<i32> {
        self.ids.values().copied().collect()
    }

    /// Resolves a player's `"location|nickname"` team key.
    ///
    /// # Returns
    /// - `Ok(Some(id))` - Team imported in this run
    /// - `Ok(None)` - The free-agent key `FA|FA`
    /// - `Err(ResolutionError)` - Key has no pipe or names a team that was not imported
    pub fn resolve_player_team(&self, team_key: &str) -> Result<Option<i32>, ResolutionError> {
        let key = TeamKey::parse(team_key)
            .ok_or_else(|| ResolutionError::MalformedTeamKey(team_key.to_string()))?;

        if key.is_free_agent() {
            return Ok(None);
        }

        self.get(&key)
            .map(Some)
            .ok_or_else(|| ResolutionError::UnknownTeam(key.to_string()))
    }

    /// Resolves a depth-chart row's team key. Free agents have no depth chart.
    pub fn resolve_team(&self, team_key: &str) -> Result<i32, ResolutionError> {
        let key = TeamKey::parse(team_key)
            .ok_or_else(|| ResolutionError::MalformedTeamKey(team_key.to_string()))?;

        self.get(&key)
            .ok_or_else(|| ResolutionError::UnknownTeam(key.to_string()))
    }
}
