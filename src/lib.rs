//! Roster store for a football franchise simulation.
//!
//! - [`league`] generates leagues deterministically and reads/writes league files
//! - [`server`] persists leagues through the import pipeline and serves the read API
//! - [`cli`] wires both into the `franchise` binary

pub mod cli;
pub mod league;
pub mod model;
pub mod server;
