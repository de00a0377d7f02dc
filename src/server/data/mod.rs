//! Data access layer repositories.
//!
//! One repository per table. Each is generic over [`sea_orm::ConnectionTrait`] so
//! the same code runs on a pooled connection or inside an import transaction.

pub mod depth_chart;
pub mod game_result;
pub mod player;
pub mod player_stats;
pub mod team;
pub mod user_profile;

#[cfg(test)]
mod tests;
