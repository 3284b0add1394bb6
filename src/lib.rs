pub mod args;
pub mod error;
pub mod model;
pub mod routes;
pub mod state;
pub mod controller {
    pub mod live;
    pub mod nba;
    pub mod player;
    pub mod resolver;
    pub mod team;
}

pub use error::{AppError, UpstreamError};
pub use state::AppState;
