//! Database model type aliases matching those used by the main crate.

pub type TeamModel = entity::team::Model;

pub type PlayerModel = entity::player::Model;

pub type DepthChartModel = entity::depth_chart::Model;

pub type GameResultModel = entity::game_result::Model;

pub type PlayerSeasonStatsModel = entity::player_season_stats::Model;

pub type UserProfileModel = entity::user_profile::Model;
