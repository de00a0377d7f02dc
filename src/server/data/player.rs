use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{league::record::PlayerRecord, server::model::db::PlayerModel};

const BATCH_SIZE: usize = 100;

pub struct PlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts players in batches of 100
    ///
    /// Empty input is a no-op.
    pub async fn create_many(&self, players: Vec<entity::player::ActiveModel>) -> Result<(), DbErr> {
        for batch in players.chunks(BATCH_SIZE) {
            entity::prelude::Player::insert_many(batch.to_vec())
                .exec(self.db)
                .await?;
        }

        Ok(())
    }

    /// Overwrites every attribute of an existing player from the record
    pub async fn update_from_record(
        &self,
        existing: PlayerModel,
        player: &PlayerRecord,
    ) -> Result<PlayerModel, DbErr> {
        let mut player_am = existing.into_active_model();
        apply_record(&mut player_am, player);

        player_am.update(self.db).await
    }

    /// Finds the player wearing `jersey` on a team, or the free agent wearing it when
    /// `team_id` is `None`
    pub async fn find_by_team_and_jersey(
        &self,
        team_id: Option<i32>,
        jersey: i32,
    ) -> Result<Option<PlayerModel>, DbErr> {
        let team_filter = match team_id {
            Some(team_id) => entity::player::Column::TeamId.eq(team_id),
            None => entity::player::Column::TeamId.is_null(),
        };

        entity::prelude::Player::find()
            .filter(team_filter)
            .filter(entity::player::Column::Jersey.eq(jersey))
            .one(self.db)
            .await
    }

    /// Returns players on any of the given teams plus every free agent
    pub async fn get_by_team_ids_and_free_agents(
        &self,
        team_ids: &[i32],
    ) -> Result<Vec<PlayerModel>, DbErr> {
        entity::prelude::Player::find()
            .filter(
                Condition::any()
                    .add(entity::player::Column::TeamId.is_in(team_ids.iter().copied()))
                    .add(entity::player::Column::TeamId.is_null()),
            )
            .order_by_asc(entity::player::Column::Id)
            .all(self.db)
            .await
    }

    /// Sorted jersey numbers of every player on a team
    pub async fn get_jerseys_by_team(&self, team_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Player::find()
            .select_only()
            .column(entity::player::Column::Jersey)
            .filter(entity::player::Column::TeamId.eq(team_id))
            .order_by_asc(entity::player::Column::Jersey)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, player_id: i32) -> Result<Option<PlayerModel>, DbErr> {
        entity::prelude::Player::find_by_id(player_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_ids(&self, player_ids: &[i32]) -> Result<Vec<PlayerModel>, DbErr> {
        entity::prelude::Player::find()
            .filter(entity::player::Column::Id.is_in(player_ids.iter().copied()))
            .order_by_asc(entity::player::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Player::find().count(self.db).await
    }

    /// Returns players ordered by id, optionally only those on `team_id`
    pub async fn get_all(&self, team_id: Option<i32>) -> Result<Vec<PlayerModel>, DbErr> {
        let mut query = entity::prelude::Player::find();
        if let Some(team_id) = team_id {
            query = query.filter(entity::player::Column::TeamId.eq(team_id));
        }

        query
            .order_by_asc(entity::player::Column::Id)
            .all(self.db)
            .await
    }
}

/// Builds an insertable player from a record
pub fn new_player(team_id: Option<i32>, player: &PlayerRecord) -> entity::player::ActiveModel {
    let mut player_am = entity::player::ActiveModel {
        team_id: ActiveValue::Set(team_id),
        ..Default::default()
    };
    apply_record(&mut player_am, player);

    player_am
}

fn apply_record(player_am: &mut entity::player::ActiveModel, player: &PlayerRecord) {
    player_am.first_name = ActiveValue::Set(player.first_name.trim().to_string());
    player_am.last_name = ActiveValue::Set(player.last_name.trim().to_string());
    player_am.position = ActiveValue::Set(player.position);
    player_am.jersey = ActiveValue::Set(player.jersey);
    player_am.age = ActiveValue::Set(player.age);
    player_am.salary = ActiveValue::Set(player.salary);
    player_am.contract_years = ActiveValue::Set(player.contract_years);
    player_am.speed = ActiveValue::Set(player.speed);
    player_am.strength = ActiveValue::Set(player.strength);
    player_am.agility = ActiveValue::Set(player.agility);
    player_am.throw_power = ActiveValue::Set(player.throw_power);
    player_am.throw_accuracy = ActiveValue::Set(player.throw_accuracy);
    player_am.catching = ActiveValue::Set(player.catching);
    player_am.tackling = ActiveValue::Set(player.tackling);
    player_am.awareness = ActiveValue::Set(player.awareness);
    player_am.potential = ActiveValue::Set(player.potential);
    player_am.stamina = ActiveValue::Set(player.stamina);
    player_am.injury_proneness = ActiveValue::Set(player.injury_proneness);
    player_am.morale = ActiveValue::Set(player.morale);
}
