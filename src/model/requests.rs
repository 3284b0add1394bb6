use serde::Deserialize;

/// Body of `POST /get_team_games`.
#[derive(Deserialize, Clone, Debug)]
pub struct TeamGamesRequest {
    pub team: String,
    /// Blank means every season type.
    #[serde(default)]
    pub season_type: String,
}

/// Body of `POST /get_stats`.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StatsRequest {
    pub player_full_name: String,
    pub stat_type: StatType,
}

/// Body of `POST /get_game_logs`.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GameLogsRequest {
    pub player_full_name: String,
    pub season: String,
}

/// Which career stats table to return: a position (`1`, `"1"`) or a table name
/// (`"CareerTotalsRegularSeason"`).
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum StatType {
    Index(i64),
    Name(String),
}
