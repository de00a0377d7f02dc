//! Readers for league files written by [`crate::league::export`] or by hand.

use std::{fs::File, io::BufReader, path::Path};

use serde::de::DeserializeOwned;

use crate::league::{
    error::FileError,
    export::{LeagueFormat, DEPTH_CHART_FILE, PLAYERS_FILE, TEAMS_FILE},
    record::League,
};

/// Reads a league from `dir`.
///
/// With no explicit `format`, CSV is used when `teams.csv` exists and JSON when
/// `teams.json` exists.
pub fn read_league(dir: &Path, format: Option<LeagueFormat>) -> Result<League, FileError> {
    let format = match format {
        Some(format) => format,
        None => detect_format(dir)?,
    };

    match format {
        LeagueFormat::Csv => read_csv(dir),
        LeagueFormat::Json => read_json(dir),
    }
}

pub fn read_csv(dir: &Path) -> Result<League, FileError> {
    Ok(League {
        teams: read_csv_table(&LeagueFormat::Csv.path(dir, TEAMS_FILE))?,
        players: read_csv_table(&LeagueFormat::Csv.path(dir, PLAYERS_FILE))?,
        depth_chart: read_csv_table(&LeagueFormat::Csv.path(dir, DEPTH_CHART_FILE))?,
    })
}

pub fn read_json(dir: &Path) -> Result<League, FileError> {
    Ok(League {
        teams: read_json_table(&LeagueFormat::Json.path(dir, TEAMS_FILE))?,
        players: read_json_table(&LeagueFormat::Json.path(dir, PLAYERS_FILE))?,
        depth_chart: read_json_table(&LeagueFormat::Json.path(dir, DEPTH_CHART_FILE))?,
    })
}

fn detect_format(dir: &Path) -> Result<LeagueFormat, FileError> {
    for format in [LeagueFormat::Csv, LeagueFormat::Json] {
        if format.path(dir, TEAMS_FILE).is_file() {
            return Ok(format);
        }
    }

    Err(FileError::NoLeagueFiles(dir.to_path_buf()))
}

fn read_csv_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, FileError> {
    if !path.is_file() {
        return Err(FileError::MissingFile(path.to_path_buf()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }

    Ok(rows)
}

fn read_json_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, FileError> {
    if !path.is_file() {
        return Err(FileError::MissingFile(path.to_path_buf()));
    }

    let reader = BufReader::new(File::open(path)?);

    Ok(serde_json::from_reader(reader)?)
}
