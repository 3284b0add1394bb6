use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, ORIGIN, REFERER};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use super::StatsProvider;
use super::roster::players_from_result_set;
use crate::error::UpstreamError;
use crate::model::{Player, PlayerId, ResultSet, ScoreboardGame, StatsResponse, TeamId};

pub const STATS_BASE_URL: &str = "https://stats.nba.com/stats";
pub const LIVE_BASE_URL: &str = "https://cdn.nba.com/static/json/liveData";
pub const DEFAULT_SEASON: &str = "2022-23";

// stats.nba.com drops requests that don't look like they come from nba.com
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const NBA_ORIGIN: &str = "https://www.nba.com";
const NBA_REFERER: &str = "https://www.nba.com/";

#[derive(Debug, Clone)]
pub struct NbaClientConfig {
    pub stats_base_url: String,
    pub live_base_url: String,
    /// Season the all-players table is requested for.
    pub roster_season: String,
    pub timeout: Option<Duration>,
}

impl Default for NbaClientConfig {
    fn default() -> Self {
        Self {
            stats_base_url: STATS_BASE_URL.to_string(),
            live_base_url: LIVE_BASE_URL.to_string(),
            roster_season: DEFAULT_SEASON.to_string(),
            timeout: Some(Duration::from_secs(30)),
        }
    }
}

/// Client for the NBA stats API and the live-data CDN.
#[derive(Debug, Clone)]
pub struct NbaClient {
    client: Client,
    stats_base_url: String,
    live_base_url: String,
    roster_season: String,
}

#[derive(Deserialize)]
struct ScoreboardDocument {
    scoreboard: Scoreboard,
}

#[derive(Deserialize)]
struct Scoreboard {
    #[serde(default)]
    games: Vec<ScoreboardGame>,
}

#[derive(Deserialize)]
struct BoxScoreDocument {
    game: Value,
}

impl NbaClient {
    /// # Errors
    ///
    /// Will return `Err` if the http client cannot be built
    pub fn new(config: NbaClientConfig) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/json, text/plain, */*"),
        );
        headers.insert(ORIGIN, HeaderValue::from_static(NBA_ORIGIN));
        headers.insert(REFERER, HeaderValue::from_static(NBA_REFERER));

        let mut builder = Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            stats_base_url: config.stats_base_url.trim_end_matches('/').to_string(),
            live_base_url: config.live_base_url.trim_end_matches('/').to_string(),
            roster_season: config.roster_season,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, UpstreamError> {
        debug!(%url, ?query, "upstream request");
        let mut request = self.client.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let resp = request.send().await.map_err(|source| UpstreamError::Network {
            url: url.to_string(),
            source,
        })?;
        let status = resp.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                url: url.to_string(),
                status,
            });
        }
        resp.json::<T>().await.map_err(|source| UpstreamError::Parse {
            url: url.to_string(),
            source,
        })
    }

    async fn stats(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<ResultSet>, UpstreamError> {
        let url = format!("{}/{endpoint}", self.stats_base_url);
        let response: StatsResponse = self.get_json(&url, query).await?;
        Ok(response.result_sets)
    }

    async fn first_result_set(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<ResultSet, UpstreamError> {
        self.stats(endpoint, query)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| UpstreamError::MissingResultSet {
                endpoint: endpoint.to_string(),
                index: 0,
            })
    }
}

#[async_trait]
impl StatsProvider for NbaClient {
    async fn players(&self) -> Result<Vec<Player>, UpstreamError> {
        let endpoint = "commonallplayers";
        let set = self
            .first_result_set(
                endpoint,
                &[
                    ("LeagueID", "00"),
                    ("Season", self.roster_season.as_str()),
                    ("IsOnlyCurrentSeason", "0"),
                ],
            )
            .await?;
        players_from_result_set(endpoint, &set)
    }

    async fn scoreboard(&self) -> Result<Vec<ScoreboardGame>, UpstreamError> {
        let url = format!("{}/scoreboard/todaysScoreboard_00.json", self.live_base_url);
        let document: ScoreboardDocument = self.get_json(&url, &[]).await?;
        Ok(document.scoreboard.games)
    }

    async fn box_score(&self, game_id: &str) -> Result<Value, UpstreamError> {
        let url = format!("{}/boxscore/boxscore_{game_id}.json", self.live_base_url);
        let document: BoxScoreDocument = self.get_json(&url, &[]).await?;
        Ok(document.game)
    }

    async fn career_stats(&self, player_id: PlayerId) -> Result<Vec<ResultSet>, UpstreamError> {
        let player_id = player_id.to_string();
        self.stats(
            "playercareerstats",
            &[
                ("PlayerID", player_id.as_str()),
                ("PerMode", "Totals"),
                ("LeagueID", ""),
            ],
        )
        .await
    }

    async fn game_log(
        &self,
        player_id: PlayerId,
        season: &str,
    ) -> Result<ResultSet, UpstreamError> {
        let player_id = player_id.to_string();
        self.first_result_set(
            "playergamelog",
            &[
                ("PlayerID", player_id.as_str()),
                ("Season", season),
                ("SeasonType", "Regular Season"),
                ("LeagueID", ""),
                ("DateFrom", ""),
                ("DateTo", ""),
            ],
        )
        .await
    }

    async fn team_games(
        &self,
        team_id: TeamId,
        season: &str,
        season_type: &str,
    ) -> Result<ResultSet, UpstreamError> {
        let team_id = team_id.to_string();
        self.first_result_set(
            "leaguegamefinder",
            &[
                ("PlayerOrTeam", "T"),
                ("TeamID", team_id.as_str()),
                ("Season", season),
                ("SeasonType", season_type),
                ("LeagueID", ""),
            ],
        )
        .await
    }
}
