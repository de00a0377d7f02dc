/// Input for recording a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGameResult {
    pub season: i32,
    pub week: i32,
    pub home_team_id: i32,
    pub away_team_id: i32,
    /// Must be `home_team_id` or `away_team_id` when set.
    pub winner_team_id: Option<i32>,
    pub home_score: i32,
    pub away_score: i32,
}
