use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
};

use crate::server::model::db::UserProfileModel;

pub struct UserProfileRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserProfileRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        display_name: &str,
        preferred_team_id: Option<i32>,
    ) -> Result<UserProfileModel, DbErr> {
        let profile = entity::user_profile::ActiveModel {
            display_name: ActiveValue::Set(display_name.trim().to_string()),
            preferred_team_id: ActiveValue::Set(preferred_team_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        profile.insert(self.db).await
    }

    pub async fn get_by_id(&self, profile_id: i32) -> Result<Option<UserProfileModel>, DbErr> {
        entity::prelude::UserProfile::find_by_id(profile_id)
            .one(self.db)
            .await
    }

    /// Returns `Ok(None)` when the profile does not exist
    pub async fn set_preferred_team(
        &self,
        profile_id: i32,
        preferred_team_id: Option<i32>,
    ) -> Result<Option<UserProfileModel>, DbErr> {
        let profile = match self.get_by_id(profile_id).await? {
            Some(profile) => profile,
            None => return Ok(None),
        };

        let mut profile_am = profile.into_active_model();
        profile_am.preferred_team_id = ActiveValue::Set(preferred_team_id);

        Ok(Some(profile_am.update(self.db).await?))
    }
}
