//! League data: deterministic generation, league files and offline checks.
//!
//! Nothing in this module touches the database. The generator produces a [`League`]
//! that can be written to disk with [`export`], read back with [`load`], and handed
//! to the import service for persistence.

pub mod check;
pub mod error;
pub mod export;
pub mod generator;
pub mod load;
pub mod pool;
pub mod record;
pub mod rng;

#[cfg(test)]
mod tests;

pub use generator::{generate_league, LeagueOptions};
pub use record::{DepthChartRecord, League, PlayerRecord, TeamKey, TeamRecord, FREE_AGENT_KEY};
