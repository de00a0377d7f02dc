//! Error types for the franchise server.
//!
//! Domain errors live in their own modules and are aggregated into [`Error`], which
//! every service returns. `IntoResponse` maps them onto HTTP responses: validation
//! and resolution failures are the caller's fault (400), everything else is logged
//! and returned as a generic 500.

pub mod config;
pub mod resolution;
pub mod retry;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    league::error::{FileError, GenerateError},
    model::api::ErrorDto,
    server::error::{
        config::ConfigError, resolution::ResolutionError, validation::ValidationError,
    },
};

/// Main error type for the franchise server.
///
/// Uses `thiserror`'s `#[from]` so `?` converts domain and library errors.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid environment configuration.
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Input failed a field or cross-entity check.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Input referenced a team, jersey or player that could not be found.
    #[error(transparent)]
    ResolutionError(#[from] ResolutionError),
    /// Invalid league generator options.
    #[error(transparent)]
    GenerateError(#[from] GenerateError),
    /// Reading or writing league files failed.
    #[error(transparent)]
    FileError(#[from] FileError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] DbErr),
    /// Socket or filesystem error outside of league files.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl Error {
    /// Whether this is a unique or foreign key violation reported by the database.
    pub fn is_integrity_violation(&self) -> bool {
        match self {
            Self::DbErr(err) => matches!(
                err.sql_err(),
                Some(SqlErr::UniqueConstraintViolation(_))
                    | Some(SqlErr::ForeignKeyConstraintViolation(_))
            ),
            _ => false,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::ResolutionError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper for converting any displayable error into a 500 response.
///
/// The error is logged; the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

/// Wrapper for converting a caller error into a 400 response carrying its message.
pub struct BadRequest<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for BadRequest<E> {
    fn into_response(self) -> Response {
        tracing::debug!("Bad request: {}", self.0);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}
