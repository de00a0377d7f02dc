//! League database fixtures.
//!
//! Values come from [`factory`](crate::fixtures::factory); only the fields passed in
//! differ between inserted rows.

use chrono::Utc;
use entity::sea_orm_active_enums::Position;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    fixtures::factory,
    model::{
        DepthChartModel, GameResultModel, PlayerModel, PlayerSeasonStatsModel, TeamModel,
        UserProfileModel,
    },
    TestContext,
};

impl TestContext {
    pub fn league<'a>(&'a mut self) -> LeagueFixtures<'a> {
        LeagueFixtures { setup: self }
    }
}

pub struct LeagueFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> LeagueFixtures<'a> {
    /// Insert a team with standard test values.
    pub async fn insert_team(
        &self,
        location_name: &str,
        nickname: &str,
    ) -> Result<TeamModel, TestError> {
        let mut team: entity::team::ActiveModel =
            factory::mock_team_model(0, location_name, nickname).into();
        team.id = ActiveValue::NotSet;
        team.created_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(entity::prelude::Team::insert(team)
            .exec_with_returning(&self.setup.db)
            .await?)
    }

    /// Insert a player with every rating set to 50.
    ///
    /// # Arguments
    /// - `team_id` - Owning team record ID, `None` for a free agent
    /// - `position` - Roster position
    /// - `jersey` - Jersey number
    pub async fn insert_player(
        &self,
        team_id: Option<i32>,
        position: Position,
        jersey: i32,
    ) -> Result<PlayerModel, TestError> {
        let mut player: entity::player::ActiveModel =
            factory::mock_player_model(0, team_id, position, jersey).into();
        player.id = ActiveValue::NotSet;

        Ok(entity::prelude::Player::insert(player)
            .exec_with_returning(&self.setup.db)
            .await?)
    }

    pub async fn insert_depth_chart(
        &self,
        team_id: i32,
        position: Position,
        starter_player_id: Option<i32>,
        backup_player_id: Option<i32>,
    ) -> Result<DepthChartModel, TestError> {
        Ok(
            entity::prelude::DepthChart::insert(entity::depth_chart::ActiveModel {
                team_id: ActiveValue::Set(team_id),
                position: ActiveValue::Set(position),
                starter_player_id: ActiveValue::Set(starter_player_id),
                backup_player_id: ActiveValue::Set(backup_player_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a game between two teams.
    pub async fn insert_game(
        &self,
        season: i32,
        week: i32,
        home_team_id: i32,
        away_team_id: i32,
        winner_team_id: Option<i32>,
    ) -> Result<GameResultModel, TestError> {
        let mut game: entity::game_result::ActiveModel =
            factory::mock_game_result_model(0, home_team_id, away_team_id).into();
        game.id = ActiveValue::NotSet;
        game.season = ActiveValue::Set(season);
        game.week = ActiveValue::Set(week);
        game.winner_team_id = ActiveValue::Set(winner_team_id);

        Ok(entity::prelude::GameResult::insert(game)
            .exec_with_returning(&self.setup.db)
            .await?)
    }

    /// Insert a zeroed season stats row.
    pub async fn insert_season_stats(
        &self,
        season: i32,
        team_id: i32,
        player_id: i32,
    ) -> Result<PlayerSeasonStatsModel, TestError> {
        Ok(entity::prelude::PlayerSeasonStats::insert(
            entity::player_season_stats::ActiveModel {
                season: ActiveValue::Set(season),
                team_id: ActiveValue::Set(team_id),
                player_id: ActiveValue::Set(player_id),
                games: ActiveValue::Set(0),
                snaps: ActiveValue::Set(0),
                pass_att: ActiveValue::Set(0),
                pass_cmp: ActiveValue::Set(0),
                pass_yds: ActiveValue::Set(0),
                pass_td: ActiveValue::Set(0),
                pass_int: ActiveValue::Set(0),
                rush_att: ActiveValue::Set(0),
                rush_yds: ActiveValue::Set(0),
                rush_td: ActiveValue::Set(0),
                rec_tgt: ActiveValue::Set(0),
                rec_rec: ActiveValue::Set(0),
                rec_yds: ActiveValue::Set(0),
                rec_td: ActiveValue::Set(0),
                def_tkl: ActiveValue::Set(0),
                def_sack: ActiveValue::Set(0),
                def_int: ActiveValue::Set(0),
                st_tkl: ActiveValue::Set(0),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_user_profile(
        &self,
        display_name: &str,
        preferred_team_id: Option<i32>,
    ) -> Result<UserProfileModel, TestError> {
        Ok(
            entity::prelude::UserProfile::insert(entity::user_profile::ActiveModel {
                display_name: ActiveValue::Set(display_name.to_string()),
                preferred_team_id: ActiveValue::Set(preferred_team_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a team with one player per `(position, jersey)` pair.
    pub async fn insert_team_with_roster(
        &self,
        location_name: &str,
        nickname: &str,
        roster: &[(Position, i32)],
    ) -> Result<(TeamModel, Vec<PlayerModel>), TestError> {
        let team = self.insert_team(location_name, nickname).await?;

        let mut players = Vec::with_capacity(roster.len());
        for (position, jersey) in roster {
            players.push(self.insert_player(Some(team.id), *position, *jersey).await?);
        }

        Ok((team, players))
    }
}
