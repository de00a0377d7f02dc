use std::fmt;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The two conferences a team can belong to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(3))")]
#[allow(clippy::upper_case_acronyms)]
pub enum Conference {
    #[sea_orm(string_value = "AFC")]
    AFC,
    #[sea_orm(string_value = "NFC")]
    NFC,
}

/// The four divisions within a conference.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(5))")]
pub enum Division {
    #[sea_orm(string_value = "East")]
    East,
    #[sea_orm(string_value = "North")]
    North,
    #[sea_orm(string_value = "South")]
    South,
    #[sea_orm(string_value = "West")]
    West,
}

/// Roster positions.
///
/// Declaration order is the stable order used when generating rosters and
/// depth charts, so `Ord` follows it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(2))")]
#[allow(clippy::upper_case_acronyms)]
pub enum Position {
    #[sea_orm(string_value = "QB")]
    QB,
    #[sea_orm(string_value = "RB")]
    RB,
    #[sea_orm(string_value = "WR")]
    WR,
    #[sea_orm(string_value = "TE")]
    TE,
    #[sea_orm(string_value = "OL")]
    OL,
    #[sea_orm(string_value = "DL")]
    DL,
    #[sea_orm(string_value = "LB")]
    LB,
    #[sea_orm(string_value = "CB")]
    CB,
    #[sea_orm(string_value = "S")]
    S,
    #[sea_orm(string_value = "K")]
    K,
    #[sea_orm(string_value = "P")]
    P,
    #[sea_orm(string_value = "LS")]
    LS,
}

impl Conference {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AFC => "AFC",
            Self::NFC => "NFC",
        }
    }
}

impl Division {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::East => "East",
            Self::North => "North",
            Self::South => "South",
            Self::West => "West",
        }
    }
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::QB => "QB",
            Self::RB => "RB",
            Self::WR => "WR",
            Self::TE => "TE",
            Self::OL => "OL",
            Self::DL => "DL",
            Self::LB => "LB",
            Self::CB => "CB",
            Self::S => "S",
            Self::K => "K",
            Self::P => "P",
            Self::LS => "LS",
        }
    }
}

impl fmt::Display for Conference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
