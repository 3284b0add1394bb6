use actix_web::HttpResponse;
use actix_web::web::{self, Data};

use crate::error::AppError;
use crate::model::{GameLogsRequest, PlayerId, ResultSet, StatType, StatsRequest};
use crate::state::AppState;

fn resolve_player(state: &AppState, full_name: &str) -> Result<PlayerId, AppError> {
    state
        .resolver
        .resolve_player_id(full_name)
        .ok_or_else(|| AppError::PlayerNotFound(full_name.to_string()))
}

/// `POST /get_stats`: one career stats table, column-oriented.
///
/// # Errors
///
/// Will return `Err` if the player is unknown, the career stats call fails, or
/// `statType` does not pick one of the returned tables
pub async fn get_stats(
    body: web::Json<StatsRequest>,
    state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();
    let player_id = resolve_player(&state, &request.player_full_name)?;
    let tables = state.provider.career_stats(player_id).await?;
    let table = select_stat_table(&tables, &request.stat_type)?;
    Ok(HttpResponse::Ok().json(table.to_columns()))
}

/// `POST /get_game_logs`: one record per game, in upstream order.
///
/// # Errors
///
/// Will return `Err` if the player is unknown or the game log call fails
pub async fn get_game_logs(
    body: web::Json<GameLogsRequest>,
    state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();
    let player_id = resolve_player(&state, &request.player_full_name)?;
    let game_log = state.provider.game_log(player_id, &request.season).await?;
    Ok(HttpResponse::Ok().json(game_log.to_records()))
}

/// Picks a table by position, numeric string, or table name (case-insensitive).
///
/// # Errors
///
/// Will return `Err` if the position is out of range or no table has that name
pub fn select_stat_table<'a>(
    tables: &'a [ResultSet],
    stat_type: &StatType,
) -> Result<&'a ResultSet, AppError> {
    match stat_type {
        StatType::Index(index) => table_at(tables, *index),
        StatType::Name(name) => {
            let name = name.trim();
            match name.parse::<i64>() {
                Ok(index) => table_at(tables, index),
                Err(_) => tables
                    .iter()
                    .find(|table| table.name.eq_ignore_ascii_case(name))
                    .ok_or_else(|| AppError::InvalidStatType(name.to_string())),
            }
        }
    }
}

/// Negative positions count back from the last table.
fn table_at(tables: &[ResultSet], index: i64) -> Result<&ResultSet, AppError> {
    let position = if index < 0 {
        i64::try_from(tables.len())
            .ok()
            .and_then(|len| usize::try_from(len + index).ok())
    } else {
        usize::try_from(index).ok()
    };
    position
        .and_then(|i| tables.get(i))
        .ok_or(AppError::StatTypeOutOfRange {
            index,
            available: tables.len(),
        })
}
