//! Cross-entity invariants checked immediately before a row is persisted.
//!
//! The database only enforces that referenced rows exist; these checks add the
//! rules that span two tables.

use entity::sea_orm_active_enums::Position;

use crate::{
    league::check::DepthSlot,
    server::{
        error::validation::ValidationError,
        model::{db::PlayerModel, game::NewGameResult},
    },
};

/// Minimum accepted game season.
pub const MIN_SEASON: i32 = 1900;

/// Checks a depth-chart row before it is inserted or updated.
///
/// Starter and backup must be distinct when both are present, and each present
/// player must belong to `team_id`.
pub fn check_depth_chart_entry(
    team_id: i32,
    position: Position,
    starter: Option<&PlayerModel>,
    backup: Option<&PlayerModel>,
) -> Result<(), ValidationError> {
    if let (Some(starter), Some(backup)) = (starter, backup) {
        if starter.id == backup.id {
            return Err(ValidationError::SameStarterAndBackup {
                team_id,
                position,
                player_id: starter.id,
            });
        }
    }

    let slots = [(DepthSlot::Starter, starter), (DepthSlot::Backup, backup)];
    for (slot, player) in slots {
        let Some(player) = player else { continue };

        if player.team_id != Some(team_id) {
            return Err(ValidationError::DepthChartCrossTeam {
                team_id,
                position,
                slot,
                player_id: player.id,
                player_team_id: player.team_id,
            });
        }
    }

    Ok(())
}

/// Checks a game result before it is inserted or updated.
pub fn check_game_result(game: &NewGameResult) -> Result<(), ValidationError> {
    if game.week < 1 {
        return Err(ValidationError::GameWeek(game.week));
    }
    if game.season < MIN_SEASON {
        return Err(ValidationError::GameSeason(game.season));
    }
    if game.home_score < 0 || game.away_score < 0 {
        return Err(ValidationError::GameScore {
            home_score: game.home_score,
            away_score: game.away_score,
        });
    }
    if game.home_team_id == game.away_team_id {
        return Err(ValidationError::GameSameTeam(game.home_team_id));
    }

    check_winner(game.winner_team_id, game.home_team_id, game.away_team_id)
}

/// Checks that a winner, when set, is one of the two participants.
pub fn check_winner(winner: Option<i32>, home: i32, away: i32) -> Result<(), ValidationError> {
    match winner {
        Some(winner) if winner != home && winner != away => {
            Err(ValidationError::GameWinner { winner, home, away })
        }
        _ => Ok(()),
    }
}
