#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use actix_web::web::Data;
use async_trait::async_trait;
use chrono_tz::Tz;
use serde_json::{Value, json};

use courtside::controller::nba::StatsProvider;
use courtside::controller::resolver::Resolver;
use courtside::error::UpstreamError;
use courtside::model::{
    Player, PlayerId, ResultSet, ScoreboardGame, ScoreboardTeam, TeamId, static_teams,
};
use courtside::state::AppState;

pub const SEASON: &str = "2022-23";
pub const LEBRON: PlayerId = 2544;
pub const TIME_ZONE: Tz = chrono_tz::America::New_York;

/// Canned provider. Records every upstream call so tests can see what was forwarded.
#[derive(Default)]
pub struct FakeProvider {
    pub scoreboard: Vec<ScoreboardGame>,
    pub box_score: Value,
    pub career_stats: Vec<ResultSet>,
    pub game_log: ResultSet,
    pub team_games: ResultSet,
    pub fail: bool,
    pub calls: Mutex<Vec<String>>,
}

impl FakeProvider {
    fn record(&self, call: String) -> Result<(), UpstreamError> {
        self.calls.lock().expect("calls lock").push(call);
        if self.fail {
            return Err(UpstreamError::Status {
                url: "http://upstream.test".to_string(),
                status: reqwest::StatusCode::BAD_GATEWAY,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl StatsProvider for FakeProvider {
    async fn players(&self) -> Result<Vec<Player>, UpstreamError> {
        self.record("players".to_string())?;
        Ok(players())
    }

    async fn scoreboard(&self) -> Result<Vec<ScoreboardGame>, UpstreamError> {
        self.record("scoreboard".to_string())?;
        Ok(self.scoreboard.clone())
    }

    async fn box_score(&self, game_id: &str) -> Result<Value, UpstreamError> {
        self.record(format!("box_score {game_id}"))?;
        Ok(self.box_score.clone())
    }

    async fn career_stats(&self, player_id: PlayerId) -> Result<Vec<ResultSet>, UpstreamError> {
        self.record(format!("career_stats {player_id}"))?;
        Ok(self.career_stats.clone())
    }

    async fn game_log(
        &self,
        player_id: PlayerId,
        season: &str,
    ) -> Result<ResultSet, UpstreamError> {
        self.record(format!("game_log {player_id} {season}"))?;
        Ok(self.game_log.clone())
    }

    async fn team_games(
        &self,
        team_id: TeamId,
        season: &str,
        season_type: &str,
    ) -> Result<ResultSet, UpstreamError> {
        self.record(format!("team_games {team_id} {season} {season_type}"))?;
        Ok(self.team_games.clone())
    }
}

pub fn players() -> Vec<Player> {
    vec![
        Player {
            id: LEBRON,
            full_name: "LeBron James".to_string(),
        },
        Player {
            id: 201_939,
            full_name: "Stephen Curry".to_string(),
        },
    ]
}

/// State over the fake provider plus a handle to inspect its calls afterwards.
pub fn app_state(provider: FakeProvider) -> (Data<AppState>, Arc<FakeProvider>) {
    let provider = Arc::new(provider);
    let teams = static_teams().expect("embedded teams parse");
    let resolver = Resolver::new(&teams, players());
    let state = AppState::new(resolver, provider.clone(), SEASON.to_string(), TIME_ZONE);
    (Data::new(state), provider)
}

pub fn calls(provider: &FakeProvider) -> Vec<String> {
    provider.calls.lock().expect("calls lock").clone()
}

pub fn scoreboard_game(id: &str, away: &str, home: &str, time: &str) -> ScoreboardGame {
    ScoreboardGame {
        game_id: id.to_string(),
        game_time_utc: time.to_string(),
        away_team: ScoreboardTeam {
            team_name: away.to_string(),
        },
        home_team: ScoreboardTeam {
            team_name: home.to_string(),
        },
    }
}

pub fn result_set(name: &str, headers: &[&str], rows: Vec<Vec<Value>>) -> ResultSet {
    ResultSet {
        name: name.to_string(),
        headers: headers.iter().map(ToString::to_string).collect(),
        row_set: rows,
    }
}

pub fn game_log() -> ResultSet {
    result_set(
        "PlayerGameLog",
        &["SEASON_ID", "Player_ID", "Game_ID", "GAME_DATE", "MATCHUP", "PTS"],
        vec![
            game_log_row("0022200002", "OCT 18, 2022", "LAL @ GSW", 31),
            game_log_row("0022200014", "OCT 20, 2022", "LAL vs. LAC", 20),
            game_log_row("0022200031", "OCT 23, 2022", "LAL vs. POR", 31),
        ],
    )
}

fn game_log_row(game_id: &str, date: &str, matchup: &str, points: i64) -> Vec<Value> {
    vec![
        json!("22022"),
        json!(LEBRON),
        json!(game_id),
        json!(date),
        json!(matchup),
        json!(points),
    ]
}

pub fn career_stats() -> Vec<ResultSet> {
    vec![
        result_set(
            "SeasonTotalsRegularSeason",
            &["PLAYER_ID", "SEASON_ID", "GP", "PTS"],
            vec![
                vec![json!(LEBRON), json!("2003-04"), json!(79), json!(1654)],
                vec![json!(LEBRON), json!("2004-05"), json!(80), json!(2175)],
            ],
        ),
        result_set(
            "CareerTotalsRegularSeason",
            &["PLAYER_ID", "GP", "PTS"],
            vec![vec![json!(LEBRON), json!(1421), json!(38652)]],
        ),
    ]
}
