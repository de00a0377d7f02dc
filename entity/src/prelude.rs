pub use super::depth_chart::Entity as DepthChart;
pub use super::game_result::Entity as GameResult;
pub use super::player::Entity as Player;
pub use super::player_season_stats::Entity as PlayerSeasonStats;
pub use super::team::Entity as Team;
pub use super::user_profile::Entity as UserProfile;
