use entity::sea_orm_active_enums::{Conference, Division, Position};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TeamDto {
    pub id: i32,
    pub location_name: String,
    pub nickname: String,
    #[schema(value_type = String, example = "AFC")]
    pub conference: Conference,
    #[schema(value_type = String, example = "East")]
    pub division: Division,
    pub power_rating: i32,
    pub cap_space: i64,
}

impl From<entity::team::Model> for TeamDto {
    fn from(team: entity::team::Model) -> Self {
        Self {
            id: team.id,
            location_name: team.location_name,
            nickname: team.nickname,
            conference: team.conference,
            division: team.division,
            power_rating: team.power_rating,
            cap_space: team.cap_space,
        }
    }
}

/// A player and all twelve ratings. `team_id` is null for free agents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlayerDto {
    pub id: i32,
    pub team_id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    #[schema(value_type = String, example = "QB")]
    pub position: Position,
    pub jersey: i32,
    pub age: i32,
    pub salary: i64,
    pub contract_years: i32,
    pub speed: i32,
    pub strength: i32,
    pub agility: i32,
    pub throw_power: i32,
    pub throw_accuracy: i32,
    pub catching: i32,
    pub tackling: i32,
    pub awareness: i32,
    pub potential: i32,
    pub stamina: i32,
    pub injury_proneness: i32,
    pub morale: i32,
}

impl From<entity::player::Model> for PlayerDto {
    fn from(player: entity::player::Model) -> Self {
        Self {
            id: player.id,
            team_id: player.team_id,
            first_name: player.first_name,
            last_name: player.last_name,
            position: player.position,
            jersey: player.jersey,
            age: player.age,
            salary: player.salary,
            contract_years: player.contract_years,
            speed: player.speed,
            strength: player.strength,
            agility: player.agility,
            throw_power: player.throw_power,
            throw_accuracy: player.throw_accuracy,
            catching: player.catching,
            tackling: player.tackling,
            awareness: player.awareness,
            potential: player.potential,
            stamina: player.stamina,
            injury_proneness: player.injury_proneness,
            morale: player.morale,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DepthChartDto {
    pub team_id: i32,
    #[schema(value_type = String, example = "QB")]
    pub position: Position,
    pub starter_player_id: Option<i32>,
    pub backup_player_id: Option<i32>,
}

impl From<entity::depth_chart::Model> for DepthChartDto {
    fn from(entry: entity::depth_chart::Model) -> Self {
        Self {
            team_id: entry.team_id,
            position: entry.position,
            starter_player_id: entry.starter_player_id,
            backup_player_id: entry.backup_player_id,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct GameResultDto {
    pub id: i32,
    pub week: i32,
    pub season: i32,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub winner_team_id: Option<i32>,
    pub home_score: i32,
    pub away_score: i32,
}

impl From<entity::game_result::Model> for GameResultDto {
    fn from(game: entity::game_result::Model) -> Self {
        Self {
            id: game.id,
            week: game.week,
            season: game.season,
            home_team_id: game.home_team_id,
            away_team_id: game.away_team_id,
            winner_team_id: game.winner_team_id,
            home_score: game.home_score,
            away_score: game.away_score,
        }
    }
}
