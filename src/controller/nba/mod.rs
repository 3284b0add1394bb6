pub mod client;
pub mod roster;

pub use client::*;
pub use roster::*;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::UpstreamError;
use crate::model::{Player, PlayerId, ResultSet, ScoreboardGame, Team, TeamId, static_teams};

/// The upstream sports-data provider.
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// Static team roster. The provider ships it with the client, so the default reads
    /// the embedded table.
    async fn teams(&self) -> Result<Vec<Team>, UpstreamError> {
        Ok(static_teams()?)
    }

    async fn players(&self) -> Result<Vec<Player>, UpstreamError>;

    /// Today's games; empty outside of game days.
    async fn scoreboard(&self) -> Result<Vec<ScoreboardGame>, UpstreamError>;

    /// The `game` object of the live box score.
    async fn box_score(&self, game_id: &str) -> Result<Value, UpstreamError>;

    /// Every career stats table, in provider order.
    async fn career_stats(&self, player_id: PlayerId) -> Result<Vec<ResultSet>, UpstreamError>;

    async fn game_log(&self, player_id: PlayerId, season: &str) -> Result<ResultSet, UpstreamError>;

    async fn team_games(
        &self,
        team_id: TeamId,
        season: &str,
        season_type: &str,
    ) -> Result<ResultSet, UpstreamError>;
}
