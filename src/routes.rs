use actix_web::{HttpResponse, web};

use crate::controller::live::{get_game_details, get_live_games};
use crate::controller::player::{get_game_logs, get_stats};
use crate::controller::team::get_team_games;
use crate::error::AppError;

/// Rejected bodies (bad json, missing fields) answer 400 with the same `{"error": ...}` shape.
#[must_use]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/get_game_details/{game_id}", web::get().to(get_game_details))
        .route("/get_live_games", web::get().to(get_live_games))
        .route("/get_team_games", web::post().to(get_team_games))
        .route("/get_stats", web::post().to(get_stats))
        .route("/get_game_logs", web::post().to(get_game_logs))
        .route("/health", web::get().to(HttpResponse::Ok));
}
