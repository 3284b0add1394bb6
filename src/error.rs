use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Failures talking to the stats provider.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("network error for {url}: {source}")]
    Network {
        url: String,
        source: reqwest::Error,
    },
    #[error("upstream returned {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("parse error for {url}: {source}")]
    Parse {
        url: String,
        source: reqwest::Error,
    },
    #[error("{endpoint} returned no result set at index {index}")]
    MissingResultSet { endpoint: String, index: usize },
    #[error("{endpoint} result set has no {column} column")]
    MissingColumn { endpoint: String, column: String },
    #[error("invalid roster: {0}")]
    Roster(String),
}

impl From<serde_json::Error> for UpstreamError {
    fn from(err: serde_json::Error) -> Self {
        Self::Roster(err.to_string())
    }
}

/// Everything a handler can fail with. Every variant renders as `{"error": "..."}`.
///
/// Unresolved teams are not an error: `/get_team_games` answers those with a 200 body.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
    #[error("Player not found: {0}")]
    PlayerNotFound(String),
    #[error("statType {index} is out of range ({available} stat tables available)")]
    StatTypeOutOfRange { index: i64, available: usize },
    #[error("statType {0:?} does not name a stat table")]
    InvalidStatType(String),
    #[error("invalid game time {value:?}: {source}")]
    Time {
        value: String,
        source: chrono::ParseError,
    },
    #[error("{0}")]
    BadRequest(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "rejected request");
        }
        HttpResponse::build(status).json(json!({ "error": self.to_string() }))
    }
}
