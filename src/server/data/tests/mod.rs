mod depth_chart;
mod player_stats;
mod user_profile;

use franchise_test_utils::prelude::*;
