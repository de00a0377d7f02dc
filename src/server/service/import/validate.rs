//! Field checks applied to every input record before it is looked up or stored.

use crate::{
    league::record::{PlayerRecord, TeamRecord, MIN_PLAYER_AGE, RATING_MAX, RATING_MIN},
    server::error::validation::ValidationError,
};

pub fn validate_team(team: &TeamRecord) -> Result<(), ValidationError> {
    if !(RATING_MIN..=RATING_MAX).contains(&team.power_rating) {
        return Err(ValidationError::TeamPowerRating {
            team: team.team_key(),
            value: team.power_rating,
        });
    }
    if team.cap_space < 0 {
        return Err(ValidationError::TeamCapSpace {
            team: team.team_key(),
            value: team.cap_space,
        });
    }

    Ok(())
}

/// Rejects players younger than the minimum age or with any rating outside [0, 100].
///
/// Ratings are checked in column order; the first offending field is reported.
pub fn validate_player(player: &PlayerRecord) -> Result<(), ValidationError> {
    if player.age < MIN_PLAYER_AGE {
        return Err(ValidationError::PlayerAge {
            player: describe(player),
            age: player.age,
        });
    }

    for (field, value) in player.ratings() {
        if !(RATING_MIN..=RATING_MAX).contains(&value) {
            return Err(ValidationError::PlayerRating {
                player: describe(player),
                field,
                value,
            });
        }
    }

    Ok(())
}

fn describe(player: &PlayerRecord) -> String {
    format!(
        "{} #{} ({})",
        player.full_name().trim(),
        player.jersey,
        player.team_key.trim()
    )
}
