//! Database entities for the franchise roster store.

pub mod prelude;

pub mod depth_chart;
pub mod game_result;
pub mod player;
pub mod player_season_stats;
pub mod sea_orm_active_enums;
pub mod team;
pub mod user_profile;
