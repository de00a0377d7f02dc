use std::path::PathBuf;

use thiserror::Error;

/// Invalid options passed to the league generator.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Roster needs {0} unique jerseys per team but only 99 are available")]
    RosterTooLarge(usize),
    #[error("Requested {0} free agents but only 99 unique jerseys are available")]
    TooManyFreeAgents(usize),
    #[error("Position {0} has a roster size of zero")]
    EmptyPositionGroup(String),
    #[error("Position {0} appears more than once in the roster sizes")]
    DuplicatePosition(String),
}

/// Failure reading or writing league files.
#[derive(Error, Debug)]
pub enum FileError {
    #[error("League file not found: {0}")]
    MissingFile(PathBuf),
    #[error("No teams.csv or teams.json found in {0}")]
    NoLeagueFiles(PathBuf),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
