use axum::response::{IntoResponse, Response};
use entity::sea_orm_active_enums::Position;
use thiserror::Error;

use crate::{league::check::DepthSlot, server::error::BadRequest};

/// A record or row failed a field-level or cross-entity check.
///
/// Messages name the entity, the field and the offending value.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Player {player}: age must be at least 18, got {age}")]
    PlayerAge { player: String, age: i32 },
    #[error("Player {player}: rating {field} must be between 0 and 100, got {value}")]
    PlayerRating {
        player: String,
        field: &'static str,
        value: i32,
    },
    #[error("Team {team}: power_rating must be between 0 and 100, got {value}")]
    TeamPowerRating { team: String, value: i32 },
    #[error("Team {team}: cap_space must not be negative, got {value}")]
    TeamCapSpace { team: String, value: i64 },
    #[error("Depth chart team {team_id} {position}: starter and backup are both player {player_id}")]
    SameStarterAndBackup {
        team_id: i32,
        position: Position,
        player_id: i32,
    },
    #[error(
        "Depth chart team {team_id} {position}: {slot} player {player_id} not found on team \
         (player belongs to {player_team_id:?})"
    )]
    DepthChartCrossTeam {
        team_id: i32,
        position: Position,
        slot: DepthSlot,
        player_id: i32,
        player_team_id: Option<i32>,
    },
    #[error("Game week must be at least 1, got {0}")]
    GameWeek(i32),
    #[error("Game season must be at least 1900, got {0}")]
    GameSeason(i32),
    #[error("Game scores must not be negative, got {home_score}-{away_score}")]
    GameScore { home_score: i32, away_score: i32 },
    #[error("Game home and away team must differ, both are team {0}")]
    GameSameTeam(i32),
    #[error("Game winner {winner} must be the home team {home} or away team {away}")]
    GameWinner { winner: i32, home: i32, away: i32 },
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        BadRequest(self).into_response()
    }
}
