//! In-memory league records.
//!
//! These are the rows produced by the generator, written to and read from league
//! files, and consumed by the importer. Teams are referenced by their natural key
//! (`"location|nickname"`), never by database id.

use std::fmt;

use entity::sea_orm_active_enums::{Conference, Division, Position};
use serde::{Deserialize, Serialize};

/// Team key used for players without a team.
pub const FREE_AGENT_KEY: &str = "FA|FA";

/// Minimum age for a rostered or free-agent player.
pub const MIN_PLAYER_AGE: i32 = 18;

/// Inclusive bounds for every player rating and team power rating.
pub const RATING_MIN: i32 = 0;
pub const RATING_MAX: i32 = 100;

/// Natural key of a team: its location name and nickname.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TeamKey {
    pub location_name: String,
    pub nickname: String,
}

impl TeamKey {
    /// Builds a key, trimming surrounding whitespace from both parts.
    pub fn new(location_name: &str, nickname: &str) -> Self {
        Self {
            location_name: location_name.trim().to_string(),
            nickname: nickname.trim().to_string(),
        }
    }

    /// Parses `"location|nickname"`, splitting on the first pipe.
    ///
    /// Returns `None` when the string contains no pipe.
    pub fn parse(team_key: &str) -> Option<Self> {
        let (location_name, nickname) = team_key.split_once('|')?;

        Some(Self::new(location_name, nickname))
    }

    /// Whether this is the free-agent pseudo team.
    pub fn is_free_agent(&self) -> bool {
        self.location_name == "FA" && self.nickname == "FA"
    }
}

impl fmt::Display for TeamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.location_name, self.nickname)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub location_name: String,
    pub nickname: String,
    pub conference: Conference,
    pub division: Division,
    pub power_rating: i32,
    pub cap_space: i64,
}

impl TeamRecord {
    pub fn key(&self) -> TeamKey {
        TeamKey::new(&self.location_name, &self.nickname)
    }

    pub fn team_key(&self) -> String {
        self.key().to_string()
    }
}

/// A player row. Field order matches the `players.csv` column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub first_name: String,
    pub last_name: String,
    pub position: Position,
    pub jersey: i32,
    pub age: i32,
    pub salary: i64,
    pub contract_years: i32,
    pub team_key: String,
    pub speed: i32,
    pub strength: i32,
    pub agility: i32,
    pub throw_power: i32,
    pub throw_accuracy: i32,
    pub catching: i32,
    pub tackling: i32,
    pub awareness: i32,
    pub potential: i32,
    pub stamina: i32,
    pub injury_proneness: i32,
    pub morale: i32,
}

impl PlayerRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// All twelve ratings paired with their column names.
    pub fn ratings(&self) -> [(&'static str, i32); 12] {
        [
            ("speed", self.speed),
            ("strength", self.strength),
            ("agility", self.agility),
            ("throw_power", self.throw_power),
            ("throw_accuracy", self.throw_accuracy),
            ("catching", self.catching),
            ("tackling", self.tackling),
            ("awareness", self.awareness),
            ("potential", self.potential),
            ("stamina", self.stamina),
            ("injury_proneness", self.injury_proneness),
            ("morale", self.morale),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthChartRecord {
    pub team_key: String,
    pub position: Position,
    pub starter_jersey: i32,
    pub backup_jersey: Option<i32>,
}

/// A complete generated or loaded league.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct League {
    pub teams: Vec<TeamRecord>,
    pub players: Vec<PlayerRecord>,
    pub depth_chart: Vec<DepthChartRecord>,
}
