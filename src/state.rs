use chrono_tz::Tz;
use std::sync::Arc;

use crate::controller::nba::StatsProvider;
use crate::controller::resolver::Resolver;

/// Shared by every worker through `web::Data`. Nothing in here changes after startup.
pub struct AppState {
    pub resolver: Resolver,
    pub provider: Arc<dyn StatsProvider>,
    /// Season `/get_team_games` searches.
    pub season: String,
    /// Zone live game times are shown in, resolved from the host at startup.
    pub time_zone: Tz,
}

impl AppState {
    #[must_use]
    pub fn new(
        resolver: Resolver,
        provider: Arc<dyn StatsProvider>,
        season: String,
        time_zone: Tz,
    ) -> Self {
        Self {
            resolver,
            provider,
            season,
            time_zone,
        }
    }
}
