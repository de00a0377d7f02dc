//! Factory functions for in-memory database models.
//!
//! These don't touch the database and are suitable for unit tests of pure
//! functions that take models as input.

use chrono::{NaiveDate, NaiveDateTime};
use entity::sea_orm_active_enums::{Conference, Division, Position};

use crate::model::{GameResultModel, PlayerModel, TeamModel};

fn fixed_timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// Create a mock team model with an average power rating.
pub fn mock_team_model(id: i32, location_name: &str, nickname: &str) -> TeamModel {
    TeamModel {
        id,
        location_name: location_name.to_string(),
        nickname: nickname.to_string(),
        conference: Conference::AFC,
        division: Division::East,
        power_rating: 50,
        cap_space: 20_000_000,
        created_at: fixed_timestamp(),
    }
}

/// Create a mock player model with every rating set to 50.
///
/// # Arguments
/// - `id` - Player record ID
/// - `team_id` - Owning team record ID, `None` for a free agent
/// - `position` - Roster position
/// - `jersey` - Jersey number
pub fn mock_player_model(
    id: i32,
    team_id: Option<i32>,
    position: Position,
    jersey: i32,
) -> PlayerModel {
    PlayerModel {
        id,
        team_id,
        first_name: "Test".to_string(),
        last_name: format!("Player{}", jersey),
        position,
        jersey,
        age: 25,
        salary: 1_000_000,
        contract_years: 2,
        speed: 50,
        strength: 50,
        agility: 50,
        throw_power: 50,
        throw_accuracy: 50,
        catching: 50,
        tackling: 50,
        awareness: 50,
        potential: 50,
        stamina: 50,
        injury_proneness: 50,
        morale: 50,
    }
}

/// Create a mock week 1 game between two teams with no winner.
pub fn mock_game_result_model(id: i32, home_team_id: i32, away_team_id: i32) -> GameResultModel {
    GameResultModel {
        id,
        week: 1,
        season: 2025,
        home_team_id,
        away_team_id,
        winner_team_id: None,
        home_score: 0,
        away_score: 0,
    }
}
