use serde::{Deserialize, Serialize};
use serde_json::Value;

pub type TeamId = i64;
pub type PlayerId = i64;

const TEAMS_JSON: &str = include_str!("../../data/teams.json");

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Team {
    pub id: TeamId,
    pub full_name: String,
    pub abbreviation: String,
    pub nickname: String,
    pub city: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub full_name: String,
}

/// The 30 franchises, in the provider's static roster order.
///
/// # Errors
///
/// Will return `Err` if the embedded team table is not valid json
pub fn static_teams() -> Result<Vec<Team>, serde_json::Error> {
    serde_json::from_str(TEAMS_JSON)
}

/// # Errors
///
/// Will return `Err` if the json is not an array of `{id, full_name}` objects
pub fn players_from_json(json: Value) -> Result<Vec<Player>, serde_json::Error> {
    serde_json::from_value(json)
}
