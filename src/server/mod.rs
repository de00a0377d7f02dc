//! Server application core modules.
//!
//! Persistence, import and game services, and the HTTP read API over the stored
//! league.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
