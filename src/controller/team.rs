use actix_web::HttpResponse;
use actix_web::web::{self, Data};
use serde_json::json;
use tracing::info;

use crate::error::AppError;
use crate::model::TeamGamesRequest;
use crate::state::AppState;

pub const TEAM_NOT_FOUND: &str = "Team not found.";

/// `POST /get_team_games`
///
/// An unresolved team answers 200 with `{"error": "Team not found."}`.
///
/// # Errors
///
/// Will return `Err` if the game finder call fails
pub async fn get_team_games(
    body: web::Json<TeamGamesRequest>,
    state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();
    let Some(team_id) = state.resolver.resolve_team_id(&request.team) else {
        info!(team = %request.team, "team not found");
        return Ok(HttpResponse::Ok().json(json!({ "error": TEAM_NOT_FOUND })));
    };

    let games = state
        .provider
        .team_games(team_id, &state.season, &request.season_type)
        .await?;
    Ok(HttpResponse::Ok().json(games.to_records()))
}
