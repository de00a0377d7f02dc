mod generate_league;

use super::*;
