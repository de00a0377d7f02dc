use axum::response::{IntoResponse, Response};
use entity::sea_orm_active_enums::Position;
use thiserror::Error;

use crate::{league::check::DepthSlot, server::error::BadRequest};

/// A reference in the input could not be resolved against the store.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("Unknown team key '{0}'")]
    UnknownTeam(String),
    #[error("Malformed team key '{0}', expected 'location|nickname'")]
    MalformedTeamKey(String),
    #[error("Team id {0} does not exist")]
    UnknownTeamId(i32),
    #[error("Player id {0} does not exist")]
    UnknownPlayer(i32),
    #[error(
        "Depth chart {team_key} {position}: {slot} jersey {jersey} not found on team \
         (available jerseys: {available:?})"
    )]
    JerseyNotFound {
        team_key: String,
        position: Position,
        slot: DepthSlot,
        jersey: i32,
        available: Vec<i32>,
    },
}

impl IntoResponse for ResolutionError {
    fn into_response(self) -> Response {
        BadRequest(self).into_response()
    }
}
