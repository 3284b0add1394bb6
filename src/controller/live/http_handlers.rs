use actix_web::HttpResponse;
use actix_web::web::{self, Data};
use chrono::TimeZone;
use std::fmt::Display;
use tracing::{debug, warn};

use super::fallback::FALLBACK_LIVE_GAMES;
use super::time_processor::localize_game_time_in;
use crate::error::AppError;
use crate::model::{LiveGameSummary, LiveGames, ScoreboardGame};
use crate::state::AppState;

/// `GET /get_game_details/{game_id}`
///
/// # Errors
///
/// Will return `Err` if the box score cannot be fetched
pub async fn get_game_details(
    path: web::Path<String>,
    state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let game_id = path.into_inner();
    let game = state.provider.box_score(&game_id).await?;
    debug!(%game_id, %game, "box score");
    Ok(HttpResponse::Ok().json(game))
}

/// `GET /get_live_games`
///
/// # Errors
///
/// Will return `Err` if the scoreboard cannot be fetched or a game time does not parse
pub async fn get_live_games(state: Data<AppState>) -> Result<HttpResponse, AppError> {
    let games = state.provider.scoreboard().await?;
    let live_games = summarize_scoreboard(games, &state.time_zone)?;
    Ok(HttpResponse::Ok().json(live_games))
}

/// An empty scoreboard becomes the fallback sample; otherwise each game gets its time
/// localized to `tz`.
///
/// # Errors
///
/// Will return `Err` if a game time does not parse
pub fn summarize_scoreboard<Tz>(
    games: Vec<ScoreboardGame>,
    tz: &Tz,
) -> Result<LiveGames, AppError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if games.is_empty() {
        warn!("scoreboard has no games, serving fallback sample");
        return Ok(LiveGames::Fallback(&FALLBACK_LIVE_GAMES));
    }

    games
        .into_iter()
        .map(|game| -> Result<LiveGameSummary, AppError> {
            let game_time_ltz = localize_game_time_in(&game.game_time_utc, tz).map_err(|source| {
                AppError::Time {
                    value: game.game_time_utc.clone(),
                    source,
                }
            })?;
            Ok(LiveGameSummary {
                game_id: game.game_id,
                away_team: game.away_team.team_name,
                home_team: game.home_team.team_name,
                game_time_ltz,
            })
        })
        .collect::<Result<Vec<_>, AppError>>()
        .map(LiveGames::Live)
}
