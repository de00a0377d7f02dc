mod import_league;

use franchise_test_utils::prelude::*;

use super::*;
use crate::league::{generate_league, LeagueOptions};

/// Two teams with a full roster each plus three free agents.
fn small_league() -> League {
    generate_league(
        11,
        &LeagueOptions {
            team_count: 2,
            free_agent_count: 3,
            ..LeagueOptions::default()
        },
    )
}

fn row_count(league: &League) -> u64 {
    (league.teams.len() + league.players.len() + league.depth_chart.len()) as u64
}
