//! Server application models.
//!
//! Application state shared by request handlers, database model aliases and the
//! input types accepted by services.

pub mod app;
pub mod db;
pub mod game;
