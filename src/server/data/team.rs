use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    league::record::{TeamKey, TeamRecord},
    server::model::db::TeamModel,
};

pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    /// Creates a new instance of [`TeamRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a team, trimming its location name and nickname
    pub async fn create(&self, team: &TeamRecord) -> Result<TeamModel, DbErr> {
        let key = team.key();

        let team = entity::team::ActiveModel {
            location_name: ActiveValue::Set(key.location_name),
            nickname: ActiveValue::Set(key.nickname),
            conference: ActiveValue::Set(team.conference),
            division: ActiveValue::Set(team.division),
            power_rating: ActiveValue::Set(team.power_rating),
            cap_space: ActiveValue::Set(team.cap_space),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        team.insert(self.db).await
    }

    /// Overwrites conference, division, power rating and cap space of an existing team
    pub async fn update_attributes(
        &self,
        existing: TeamModel,
        team: &TeamRecord,
    ) -> Result<TeamModel, DbErr> {
        let mut team_am = existing.into_active_model();
        team_am.conference = ActiveValue::Set(team.conference);
        team_am.division = ActiveValue::Set(team.division);
        team_am.power_rating = ActiveValue::Set(team.power_rating);
        team_am.cap_space = ActiveValue::Set(team.cap_space);

        team_am.update(self.db).await
    }

    pub async fn find_by_key(&self, key: &TeamKey) -> Result<Option<TeamModel>, DbErr> {
        entity::prelude::Team::find()
            .filter(entity::team::Column::LocationName.eq(key.location_name.as_str()))
            .filter(entity::team::Column::Nickname.eq(key.nickname.as_str()))
            .one(self.db)
            .await
    }

    pub async fn get_by_id(&self, team_id: i32) -> Result<Option<TeamModel>, DbErr> {
        entity::prelude::Team::find_by_id(team_id).one(self.db).await
    }

    /// Returns every team ordered by id
    pub async fn get_all(&self) -> Result<Vec<TeamModel>, DbErr> {
        entity::prelude::Team::find()
            .order_by_asc(entity::team::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Team::find().count(self.db).await
    }

    /// Deletes a team, cascading to its depth chart and clearing its players' team
    ///
    /// Returns OK regardless of the team existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, team_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Team::delete_by_id(team_id)
            .exec(self.db)
            .await
    }
}
