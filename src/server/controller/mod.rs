//! HTTP controller endpoints for the franchise read API.
//!
//! Handlers are thin: they query a repository, convert models into DTOs and
//! return JSON. Each endpoint is documented for OpenAPI with utoipa.

pub mod depth_chart;
pub mod game;
pub mod health;
pub mod player;
pub mod team;
