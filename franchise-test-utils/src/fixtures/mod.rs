//! Test fixtures.
//!
//! - `factory` - in-memory models with standard test values
//! - `league` - database insertion of teams, players, depth charts, games and profiles

pub mod factory;
pub mod league;
