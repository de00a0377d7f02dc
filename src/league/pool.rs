//! Fixed identity pools and rating tables used by the generator.

use entity::sea_orm_active_enums::{Conference, Division, Position};

/// Roster size per position, 53 players per team. The order here is the order
/// players and depth-chart rows are generated in.
pub const DEFAULT_ROSTER_SIZES: [(Position, usize); 12] = [
    (Position::QB, 3),
    (Position::RB, 4),
    (Position::WR, 6),
    (Position::TE, 3),
    (Position::OL, 9),
    (Position::DL, 8),
    (Position::LB, 7),
    (Position::CB, 6),
    (Position::S, 4),
    (Position::K, 1),
    (Position::P, 1),
    (Position::LS, 1),
];

/// Every roster position, used to draw free-agent positions.
pub const POSITIONS: [Position; 12] = [
    Position::QB,
    Position::RB,
    Position::WR,
    Position::TE,
    Position::OL,
    Position::DL,
    Position::LB,
    Position::CB,
    Position::S,
    Position::K,
    Position::P,
    Position::LS,
];

/// 32 generic team identities: (location, nickname, conference, division).
pub const DEFAULT_TEAMS: [(&str, &str, Conference, Division); 32] = [
    ("Arlington", "Arrows", Conference::NFC, Division::East),
    ("Birmingham", "Bulldogs", Conference::NFC, Division::South),
    ("Cedar City", "Comets", Conference::NFC, Division::North),
    ("Daytona", "Dragons", Conference::NFC, Division::West),
    ("Eugene", "Express", Conference::AFC, Division::East),
    ("Fresno", "Falcons", Conference::AFC, Division::South),
    ("Glendale", "Guardians", Conference::AFC, Division::North),
    ("Helena", "Hawks", Conference::AFC, Division::West),
    ("Irvine", "Ice", Conference::NFC, Division::East),
    ("Jackson", "Jackals", Conference::NFC, Division::South),
    ("Knox", "Knights", Conference::NFC, Division::North),
    ("Laredo", "Lightning", Conference::NFC, Division::West),
    ("Madison", "Mammoths", Conference::AFC, Division::East),
    ("Naples", "Nomads", Conference::AFC, Division::South),
    ("Ogden", "Outriders", Conference::AFC, Division::North),
    ("Plano", "Phantoms", Conference::AFC, Division::West),
    ("Quincy", "Quakes", Conference::NFC, Division::East),
    ("Reno", "Ravens", Conference::NFC, Division::South),
    ("Salem", "Sentinels", Conference::NFC, Division::North),
    ("Tulsa", "Typhoon", Conference::NFC, Division::West),
    ("Urbana", "Union", Conference::AFC, Division::East),
    ("Visalia", "Vipers", Conference::AFC, Division::South),
    ("Waco", "Wardens", Conference::AFC, Division::North),
    ("Yonkers", "Yetis", Conference::AFC, Division::West),
    ("Abilene", "Anchors", Conference::NFC, Division::East),
    ("Boise", "Bison", Conference::NFC, Division::South),
    ("Chandler", "Chargers", Conference::NFC, Division::North),
    ("Dover", "Defenders", Conference::NFC, Division::West),
    ("Erie", "Eagles", Conference::AFC, Division::East),
    ("Flagstaff", "Frontiers", Conference::AFC, Division::South),
    ("Grandview", "Grizzlies", Conference::AFC, Division::North),
    ("Henderson", "Hurricanes", Conference::AFC, Division::West),
];

pub const FIRST_NAMES: [&str; 30] = [
    "John", "Max", "Will", "Alex", "Chris", "Jordan", "Taylor", "Jamie", "Sam", "Pat", "Casey",
    "Riley", "Logan", "Drew", "Carter", "Avery", "Micah", "Lane", "Rowan", "Kai", "Reed", "Shawn",
    "Corey", "Evan", "Noel", "Shane", "Glen", "Owen", "Zane", "Jesse",
];

pub const LAST_NAMES: [&str; 30] = [
    "Doe", "Runner", "Hands", "Strong", "Swift", "Stone", "Fields", "Brooks", "Hill", "Ward",
    "Hunt", "Price", "Cole", "Reed", "King", "Knight", "Moss", "White", "Black", "Young", "West",
    "North", "South", "East", "Powers", "Miles", "Page", "Woods", "Clark", "Ford",
];

/// Rating attributes that are drawn from a position-specific Gaussian.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Speed,
    Strength,
    Agility,
    ThrowPower,
    ThrowAccuracy,
    Catching,
    Tackling,
    Awareness,
    Potential,
    Stamina,
}

/// Spread of a rating draw; the Gaussian standard deviation is a third of it.
pub const RATING_SPREAD: f64 = 25.0;

/// Center of the rating draw for `attribute` at `position`, if the position has one.
pub fn rating_mean(position: Position, attribute: Attribute) -> Option<f64> {
    use Attribute::*;

    let mean = match (position, attribute) {
        (Position::QB, ThrowPower) => 72,
        (Position::QB, ThrowAccuracy) => 70,
        (Position::QB, Awareness) => 60,
        (Position::QB, Speed) => 55,
        (Position::QB, Agility) => 55,

        (Position::RB, Speed) => 80,
        (Position::RB, Agility) => 75,
        (Position::RB, Strength) => 60,
        (Position::RB, Stamina) => 78,
        (Position::RB, Awareness) => 50,

        (Position::WR, Speed) => 85,
        (Position::WR, Agility) => 82,
        (Position::WR, Catching) => 78,
        (Position::WR, Stamina) => 82,
        (Position::WR, Awareness) => 55,

        (Position::TE, Strength) => 70,
        (Position::TE, Catching) => 68,
        (Position::TE, Speed) => 62,
        (Position::TE, Awareness) => 55,

        (Position::OL, Strength) => 85,
        (Position::OL, Awareness) => 60,
        (Position::OL, Stamina) => 80,

        (Position::DL, Strength) => 82,
        (Position::DL, Tackling) => 78,
        (Position::DL, Awareness) => 55,
        (Position::DL, Stamina) => 78,

        (Position::LB, Strength) => 75,
        (Position::LB, Tackling) => 80,
        (Position::LB, Awareness) => 60,
        (Position::LB, Speed) => 60,

        (Position::CB, Speed) => 86,
        (Position::CB, Agility) => 84,
        (Position::CB, Awareness) => 58,
        (Position::CB, Catching) => 55,

        (Position::S, Speed) => 82,
        (Position::S, Agility) => 78,
        (Position::S, Awareness) => 62,
        (Position::S, Tackling) => 70,

        (Position::K | Position::P | Position::LS, Awareness) => 55,
        (Position::K | Position::P | Position::LS, Stamina) => 70,

        _ => return None,
    };

    Some(f64::from(mean))
}
