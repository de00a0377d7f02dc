//! Database model type aliases.
//!
//! Short names for the `entity` crate's models, used in repository and service
//! signatures.

/// A team, keyed naturally by (location_name, nickname).
pub type TeamModel = entity::team::Model;

/// A rostered player or, with no `team_id`, a free agent.
pub type PlayerModel = entity::player::Model;

/// Starter and backup for one (team, position).
///
/// Both player references, when set, point at players on the same team.
pub type DepthChartModel = entity::depth_chart::Model;

pub type GameResultModel = entity::game_result::Model;

pub type PlayerSeasonStatsModel = entity::player_season_stats::Model;

pub type UserProfileModel = entity::user_profile::Model;
