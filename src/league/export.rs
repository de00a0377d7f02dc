//! Writers for league files.
//!
//! CSV output is three files (`teams.csv`, `players.csv`, `depth_chart.csv`) with
//! headers taken from the record field names. JSON output is the same three tables
//! as pretty-printed arrays.

use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::league::{error::FileError, record::League};

pub const TEAMS_FILE: &str = "teams";
pub const PLAYERS_FILE: &str = "players";
pub const DEPTH_CHART_FILE: &str = "depth_chart";

/// On-disk format of a league directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LeagueFormat {
    Csv,
    Json,
}

impl LeagueFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// Path of `table` in `dir` for this format.
    pub fn path(&self, dir: &Path, table: &str) -> PathBuf {
        dir.join(format!("{}.{}", table, self.extension()))
    }
}

/// Writes `league` to `dir` in `format`, creating the directory if needed.
pub fn write_league(dir: &Path, league: &League, format: LeagueFormat) -> Result<(), FileError> {
    std::fs::create_dir_all(dir)?;

    match format {
        LeagueFormat::Csv => write_csv(dir, league),
        LeagueFormat::Json => write_json(dir, league),
    }
}

pub fn write_csv(dir: &Path, league: &League) -> Result<(), FileError> {
    write_csv_table(&LeagueFormat::Csv.path(dir, TEAMS_FILE), &league.teams)?;
    write_csv_table(&LeagueFormat::Csv.path(dir, PLAYERS_FILE), &league.players)?;
    write_csv_table(
        &LeagueFormat::Csv.path(dir, DEPTH_CHART_FILE),
        &league.depth_chart,
    )?;

    Ok(())
}

pub fn write_json(dir: &Path, league: &League) -> Result<(), FileError> {
    write_json_table(&LeagueFormat::Json.path(dir, TEAMS_FILE), &league.teams)?;
    write_json_table(&LeagueFormat::Json.path(dir, PLAYERS_FILE), &league.players)?;
    write_json_table(
        &LeagueFormat::Json.path(dir, DEPTH_CHART_FILE),
        &league.depth_chart,
    )?;

    Ok(())
}

fn write_csv_table<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), FileError> {
    let mut writer = csv::Writer::from_path(path)?;

    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}

fn write_json_table<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), FileError> {
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, rows)?;

    Ok(())
}
