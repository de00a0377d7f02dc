use std::collections::HashSet;

use entity::sea_orm_active_enums::Position;

use super::*;
use crate::league::{error::GenerateError, pool::DEFAULT_ROSTER_SIZES};

/// Expect identical leagues for the same seed
#[test]
fn same_seed_produces_identical_league() {
    let options = LeagueOptions::default();

    let first = generate_league(2025, &options);
    let second = generate_league(2025, &options);

    assert_eq!(first, second);
}

/// Expect different seeds to produce different players
#[test]
fn different_seed_produces_different_players() {
    let options = LeagueOptions::default();

    let first = generate_league(1, &options);
    let second = generate_league(2, &options);

    assert_eq!(first.teams, second.teams);
    assert_ne!(first.players, second.players);
}

/// Expect the seed 123 league to have the documented shape and a stable prefix
#[test]
fn seed_123_full_league_shape() {
    let options = LeagueOptions::default();
    let roster_total: usize = DEFAULT_ROSTER_SIZES.iter().map(|(_, c)| c).sum();

    let league = generate_league(123, &options);

    assert_eq!(league.teams.len(), 32);
    assert_eq!(league.players.len(), 32 * roster_total);
    assert_eq!(league.depth_chart.len(), 32 * DEFAULT_ROSTER_SIZES.len());

    let prefix = |league: &League| -> Vec<(String, String, Position, i32, String)> {
        league
            .players
            .iter()
            .take(5)
            .map(|p| {
                (
                    p.first_name.clone(),
                    p.last_name.clone(),
                    p.position,
                    p.jersey,
                    p.team_key.clone(),
                )
            })
            .collect()
    };

    let again = generate_league(123, &options);
    assert_eq!(prefix(&league), prefix(&again));
    let first = prefix(&league);
    assert!(first.iter().all(|(.., team_key)| team_key == "Arlington|Arrows"));
    assert!(first[..3].iter().all(|(_, _, position, ..)| *position == Position::QB));
    assert_eq!(first[3].2, Position::RB);
}

/// Expect jersey numbers to be distinct within every team
#[test]
fn jerseys_unique_within_team() {
    let league = generate_league(77, &LeagueOptions::default());

    for team in &league.teams {
        let team_key = team.team_key();
        let jerseys: Vec<i32> = league
            .players
            .iter()
            .filter(|p| p.team_key == team_key)
            .map(|p| p.jersey)
            .collect();
        let unique: HashSet<i32> = jerseys.iter().copied().collect();

        assert_eq!(jerseys.len(), unique.len(), "duplicate jersey on {}", team_key);
        assert!(jerseys.iter().all(|j| (1..=99).contains(j)));
    }
}

/// Expect every rating within 0..=100 and every age at least 18
#[test]
fn ratings_and_ages_in_bounds() {
    let options = LeagueOptions {
        free_agent_count: 40,
        ..LeagueOptions::default()
    };
    let league = generate_league(9001, &options);

    for player in &league.players {
        assert!(player.age >= 18 && (21..=33).contains(&player.age));
        assert!((500_000..=5_000_000).contains(&player.salary));
        assert!((1..=4).contains(&player.contract_years));
        assert!((50..=80).contains(&player.morale));

        for (name, value) in player.ratings() {
            assert!(
                (0..=100).contains(&value),
                "{} = {} for {}",
                name,
                value,
                player.full_name()
            );
        }
    }
}

/// Expect starter and backup to be the first two jerseys of each position group
#[test]
fn depth_chart_uses_first_two_of_each_group() {
    let league = generate_league(5, &LeagueOptions::default());
    let team_key = league.teams[0].team_key();

    for row in league.depth_chart.iter().filter(|d| d.team_key == team_key) {
        let group: Vec<i32> = league
            .players
            .iter()
            .filter(|p| p.team_key == team_key && p.position == row.position)
            .map(|p| p.jersey)
            .collect();

        assert_eq!(row.starter_jersey, group[0]);
        assert_eq!(row.backup_jersey, group.get(1).copied());
    }

    let kicker = league
        .depth_chart
        .iter()
        .find(|d| d.team_key == team_key && d.position == Position::K)
        .unwrap();
    assert_eq!(kicker.backup_jersey, None);
}

/// Expect team identities to cycle through the pool past 32 teams
#[test]
fn team_identities_cycle() {
    let options = LeagueOptions {
        team_count: 34,
        roster_sizes: vec![(Position::QB, 1)],
        ..LeagueOptions::default()
    };

    let league = generate_league(1, &options);

    assert_eq!(league.teams.len(), 34);
    assert_eq!(league.teams[32], league.teams[0]);
    assert_eq!(league.teams[33], league.teams[1]);
}

/// Expect free agents to use the free-agent key and unique jerseys
#[test]
fn free_agents_have_no_team_and_unique_jerseys() {
    let options = LeagueOptions {
        team_count: 2,
        free_agent_count: 99,
        ..LeagueOptions::default()
    };

    let league = generate_league(31, &options);
    let free_agents: Vec<&PlayerRecord> = league
        .players
        .iter()
        .filter(|p| p.team_key == FREE_AGENT_KEY)
        .collect();
    let jerseys: HashSet<i32> = free_agents.iter().map(|p| p.jersey).collect();

    assert_eq!(free_agents.len(), 99);
    assert_eq!(jerseys.len(), 99);
    assert_eq!(league.players.len(), 2 * 53 + 99);
}

/// Expect team defaults to come from the options
#[test]
fn team_attributes_come_from_options() {
    let options = LeagueOptions {
        team_count: 3,
        power_rating: 77,
        cap_space: 1_000,
        ..LeagueOptions::default()
    };

    let league = generate_league(1, &options);

    assert!(league
        .teams
        .iter()
        .all(|t| t.power_rating == 77 && t.cap_space == 1_000));
}

/// Expect custom roster sizes to drive player and depth counts
#[test]
fn custom_roster_sizes() {
    let options = LeagueOptions {
        team_count: 4,
        roster_sizes: vec![(Position::QB, 2), (Position::K, 1)],
        ..LeagueOptions::default()
    };

    let league = generate_league(8, &options);

    assert_eq!(league.players.len(), 12);
    assert_eq!(league.depth_chart.len(), 8);
}

/// Expect option validation to reject impossible rosters
#[test]
fn validate_rejects_bad_options() {
    let too_large = LeagueOptions {
        roster_sizes: vec![(Position::OL, 100)],
        ..LeagueOptions::default()
    };
    assert_eq!(too_large.validate(), Err(GenerateError::RosterTooLarge(100)));

    let empty_group = LeagueOptions {
        roster_sizes: vec![(Position::QB, 0)],
        ..LeagueOptions::default()
    };
    assert!(matches!(
        empty_group.validate(),
        Err(GenerateError::EmptyPositionGroup(_))
    ));

    let duplicate = LeagueOptions {
        roster_sizes: vec![(Position::QB, 1), (Position::QB, 2)],
        ..LeagueOptions::default()
    };
    assert!(matches!(
        duplicate.validate(),
        Err(GenerateError::DuplicatePosition(_))
    ));

    let free_agents = LeagueOptions {
        free_agent_count: 100,
        ..LeagueOptions::default()
    };
    assert_eq!(
        free_agents.validate(),
        Err(GenerateError::TooManyFreeAgents(100))
    );

    assert!(LeagueOptions::default().validate().is_ok());
}
