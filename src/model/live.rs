use serde::{Deserialize, Serialize};

/// A game as listed on the live scoreboard. Only the fields we reshape are kept.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ScoreboardGame {
    pub game_id: String,
    #[serde(rename = "gameTimeUTC")]
    pub game_time_utc: String,
    pub away_team: ScoreboardTeam,
    pub home_team: ScoreboardTeam,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ScoreboardTeam {
    pub team_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LiveGameSummary {
    pub game_id: String,
    pub away_team: String,
    pub home_team: String,
    #[serde(rename = "gameTimeLTZ")]
    pub game_time_ltz: String,
}

/// Hardcoded sample game. Keeps the raw UTC time under `gameTimeUTC`.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FallbackGame {
    pub game_id: &'static str,
    pub away_team: &'static str,
    pub home_team: &'static str,
    #[serde(rename = "gameTimeUTC")]
    pub game_time_utc: &'static str,
}

/// Body of `/get_live_games`: either today's games or the fallback sample.
#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum LiveGames {
    Live(Vec<LiveGameSummary>),
    Fallback(&'static [FallbackGame]),
}
