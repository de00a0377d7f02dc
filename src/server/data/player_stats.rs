use entity::player_season_stats::Column;
use migration::{Expr, ExprTrait};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::db::PlayerSeasonStatsModel;

/// Counter increments applied by [`PlayerSeasonStatsRepository::add`].
///
/// Fields left at zero leave the stored counter unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatLine {
    pub games: i32,
    pub snaps: i32,
    pub pass_att: i32,
    pub pass_cmp: i32,
    pub pass_yds: i32,
    pub pass_td: i32,
    pub pass_int: i32,
    pub rush_att: i32,
    pub rush_yds: i32,
    pub rush_td: i32,
    pub rec_tgt: i32,
    pub rec_rec: i32,
    pub rec_yds: i32,
    pub rec_td: i32,
    pub def_tkl: i32,
    pub def_sack: i32,
    pub def_int: i32,
    pub st_tkl: i32,
}

impl StatLine {
    fn columns(&self) -> [(Column, i32); 18] {
        [
            (Column::Games, self.games),
            (Column::Snaps, self.snaps),
            (Column::PassAtt, self.pass_att),
            (Column::PassCmp, self.pass_cmp),
            (Column::PassYds, self.pass_yds),
            (Column::PassTd, self.pass_td),
            (Column::PassInt, self.pass_int),
            (Column::RushAtt, self.rush_att),
            (Column::RushYds, self.rush_yds),
            (Column::RushTd, self.rush_td),
            (Column::RecTgt, self.rec_tgt),
            (Column::RecRec, self.rec_rec),
            (Column::RecYds, self.rec_yds),
            (Column::RecTd, self.rec_td),
            (Column::DefTkl, self.def_tkl),
            (Column::DefSack, self.def_sack),
            (Column::DefInt, self.def_int),
            (Column::StTkl, self.st_tkl),
        ]
    }
}

pub struct PlayerSeasonStatsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerSeasonStatsRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a row with every counter at zero
    pub async fn create(
        &self,
        season: i32,
        team_id: i32,
        player_id: i32,
    ) -> Result<PlayerSeasonStatsModel, DbErr> {
        let mut stats = entity::player_season_stats::ActiveModel {
            season: ActiveValue::Set(season),
            team_id: ActiveValue::Set(team_id),
            player_id: ActiveValue::Set(player_id),
            ..Default::default()
        };
        for (column, _) in StatLine::default().columns() {
            stats.set(column, 0.into());
        }

        stats.insert(self.db).await
    }

    pub async fn find(
        &self,
        season: i32,
        team_id: i32,
        player_id: i32,
    ) -> Result<Option<PlayerSeasonStatsModel>, DbErr> {
        entity::prelude::PlayerSeasonStats::find()
            .filter(Column::Season.eq(season))
            .filter(Column::TeamId.eq(team_id))
            .filter(Column::PlayerId.eq(player_id))
            .one(self.db)
            .await
    }

    /// Returns a player's rows ordered by season
    pub async fn get_by_player(
        &self,
        player_id: i32,
    ) -> Result<Vec<PlayerSeasonStatsModel>, DbErr> {
        entity::prelude::PlayerSeasonStats::find()
            .filter(Column::PlayerId.eq(player_id))
            .order_by_asc(Column::Season)
            .order_by_asc(Column::Id)
            .all(self.db)
            .await
    }

    /// Adds `line` to the stored counters in a single UPDATE
    ///
    /// Returns the updated row, or `None` when `stats_id` does not exist.
    pub async fn add(
        &self,
        stats_id: i32,
        line: &StatLine,
    ) -> Result<Option<PlayerSeasonStatsModel>, DbErr> {
        let mut update = entity::prelude::PlayerSeasonStats::update_many()
            .filter(Column::Id.eq(stats_id));
        for (column, delta) in line.columns() {
            update = update.col_expr(column, Expr::col(column).add(delta));
        }

        let result = update.exec(self.db).await?;
        if result.rows_affected == 0 {
            return Ok(None);
        }

        entity::prelude::PlayerSeasonStats::find_by_id(stats_id)
            .one(self.db)
            .await
    }
}
