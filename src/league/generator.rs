//! Deterministic league generation.
//!
//! [`generate_league`] is a pure function of its seed and options. All randomness
//! flows through a single [`SeededRng`] in a fixed order: per team the jersey shuffle
//! comes first, then each position group in roster order, then each player's name,
//! contract and ratings. Free agents are drawn after every team.

use std::collections::HashSet;

use entity::sea_orm_active_enums::Position;

use crate::league::{
    error::GenerateError,
    pool::{
        rating_mean, Attribute, DEFAULT_ROSTER_SIZES, DEFAULT_TEAMS, FIRST_NAMES, LAST_NAMES,
        POSITIONS, RATING_SPREAD,
    },
    record::{
        DepthChartRecord, League, PlayerRecord, TeamRecord, FREE_AGENT_KEY, RATING_MAX, RATING_MIN,
    },
    rng::SeededRng,
};

/// Number of distinct jersey numbers (1 through 99).
pub const JERSEY_COUNT: usize = 99;

/// Tunables for [`generate_league`].
#[derive(Debug, Clone, PartialEq)]
pub struct LeagueOptions {
    /// Number of teams; identities cycle through the 32-team pool when larger.
    pub team_count: usize,
    /// Players per position, generated in this order.
    pub roster_sizes: Vec<(Position, usize)>,
    /// Additional players generated without a team.
    pub free_agent_count: usize,
    /// Power rating assigned to every generated team.
    pub power_rating: i32,
    /// Cap space assigned to every generated team.
    pub cap_space: i64,
}

impl Default for LeagueOptions {
    fn default() -> Self {
        Self {
            team_count: DEFAULT_TEAMS.len(),
            roster_sizes: DEFAULT_ROSTER_SIZES.to_vec(),
            free_agent_count: 0,
            power_rating: 50,
            cap_space: 20_000_000,
        }
    }
}

impl LeagueOptions {
    /// Players generated per team.
    pub fn roster_total(&self) -> usize {
        self.roster_sizes.iter().map(|(_, count)| count).sum()
    }

    /// Checks the options can produce a league with unique jerseys per team.
    pub fn validate(&self) -> Result<(), GenerateError> {
        let mut seen = HashSet::new();

        for (position, count) in &self.roster_sizes {
            if *count == 0 {
                return Err(GenerateError::EmptyPositionGroup(position.to_string()));
            }
            if !seen.insert(*position) {
                return Err(GenerateError::DuplicatePosition(position.to_string()));
            }
        }

        let roster_total = self.roster_total();
        if roster_total > JERSEY_COUNT {
            return Err(GenerateError::RosterTooLarge(roster_total));
        }

        if self.free_agent_count > JERSEY_COUNT {
            return Err(GenerateError::TooManyFreeAgents(self.free_agent_count));
        }

        Ok(())
    }
}

/// Generates teams, players and depth-chart rows from `seed`.
///
/// Within a team every jersey is distinct, as is every jersey in the free-agent
/// pool. Each position's first and second jersey become its starter and backup.
///
/// # Panics
/// Panics if `options` fails [`LeagueOptions::validate`]; callers taking options
/// from user input should validate first.
pub fn generate_league(seed: u64, options: &LeagueOptions) -> League {
    if let Err(e) = options.validate() {
        panic!("invalid league options: {}", e);
    }

    let mut rng = SeededRng::new(seed);
    let mut league = League::default();
    let roster_total = options.roster_total();

    for index in 0..options.team_count {
        let (location_name, nickname, conference, division) =
            DEFAULT_TEAMS[index % DEFAULT_TEAMS.len()];

        let team = TeamRecord {
            location_name: location_name.to_string(),
            nickname: nickname.to_string(),
            conference,
            division,
            power_rating: options.power_rating,
            cap_space: options.cap_space,
        };
        let team_key = team.team_key();
        league.teams.push(team);

        let jerseys = unique_jerseys(&mut rng, roster_total);
        let mut offset = 0;

        for (position, count) in &options.roster_sizes {
            let group = &jerseys[offset..offset + count];
            offset += count;

            for jersey in group {
                league
                    .players
                    .push(make_player(&mut rng, &team_key, *position, *jersey));
            }

            league.depth_chart.push(DepthChartRecord {
                team_key: team_key.clone(),
                position: *position,
                starter_jersey: group[0],
                backup_jersey: group.get(1).copied(),
            });
        }
    }

    if options.free_agent_count > 0 {
        let jerseys = unique_jerseys(&mut rng, options.free_agent_count);

        for jersey in jerseys {
            let position = *rng.choice(&POSITIONS);
            league
                .players
                .push(make_player(&mut rng, FREE_AGENT_KEY, position, jersey));
        }
    }

    league
}

/// Shuffles 1..=99 and keeps the first `count`.
fn unique_jerseys(rng: &mut SeededRng, count: usize) -> Vec<i32> {
    let mut pool: Vec<i32> = (1..=JERSEY_COUNT as i32).collect();
    rng.shuffle(&mut pool);
    pool.truncate(count);

    pool
}

fn make_player(rng: &mut SeededRng, team_key: &str, position: Position, jersey: i32) -> PlayerRecord {
    let first_name = rng.choice(&FIRST_NAMES).to_string();
    let last_name = rng.choice(&LAST_NAMES).to_string();
    let age = rng.int_range(21, 33) as i32;
    let salary = rng.int_range(500_000, 5_000_000);
    let contract_years = rng.int_range(1, 4) as i32;

    let speed = rating(rng, position, Attribute::Speed, 50.0);
    let strength = rating(rng, position, Attribute::Strength, 50.0);
    let agility = rating(rng, position, Attribute::Agility, 50.0);
    let throw_power = rating(rng, position, Attribute::ThrowPower, 50.0);
    let throw_accuracy = rating(rng, position, Attribute::ThrowAccuracy, 50.0);
    let catching = rating(rng, position, Attribute::Catching, 50.0);
    let tackling = rating(rng, position, Attribute::Tackling, 50.0);
    let awareness = rating(rng, position, Attribute::Awareness, 50.0);
    let potential = rating(rng, position, Attribute::Potential, 60.0);
    let stamina = rating(rng, position, Attribute::Stamina, 70.0);
    let injury_proneness = clamp_rating(100 - rating(rng, position, Attribute::Stamina, 65.0));
    let morale = rng.int_range(50, 80) as i32;

    PlayerRecord {
        first_name,
        last_name,
        position,
        jersey,
        age,
        salary,
        contract_years,
        team_key: team_key.to_string(),
        speed,
        strength,
        agility,
        throw_power,
        throw_accuracy,
        catching,
        tackling,
        awareness,
        potential,
        stamina,
        injury_proneness,
        morale,
    }
}

/// Gaussian draw around the position mean (or `base`), truncated toward zero and clamped.
fn rating(rng: &mut SeededRng, position: Position, attribute: Attribute, base: f64) -> i32 {
    let center = rating_mean(position, attribute).unwrap_or(base);
    let sample = rng.gauss(center, RATING_SPREAD / 3.0);

    clamp_rating(sample.trunc() as i32)
}

fn clamp_rating(value: i32) -> i32 {
    value.clamp(RATING_MIN, RATING_MAX)
}
