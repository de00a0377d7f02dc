//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with a state built from an in-memory database.

mod depth_chart;
mod game;
mod health;
mod player;
mod team;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use franchise_test_utils::prelude::*;

use crate::util::{json_body, TestContextExt};
