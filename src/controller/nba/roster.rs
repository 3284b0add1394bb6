use tracing::info;

use super::StatsProvider;
use crate::controller::resolver::Resolver;
use crate::error::UpstreamError;
use crate::model::{Player, ResultSet};

const PERSON_ID: &str = "PERSON_ID";
const DISPLAY_FIRST_LAST: &str = "DISPLAY_FIRST_LAST";

/// Loads both rosters once. `players` replaces the provider's player list when given.
///
/// # Errors
///
/// Will return `Err` if the provider cannot list teams or players
pub async fn load_resolver(
    provider: &dyn StatsProvider,
    players: Option<Vec<Player>>,
) -> Result<Resolver, UpstreamError> {
    let teams = provider.teams().await?;
    let players = match players {
        Some(players) => {
            info!(count = players.len(), "using player roster from file");
            players
        }
        None => provider.players().await?,
    };
    Ok(Resolver::new(&teams, players))
}

/// Reads `{id, full_name}` pairs out of the all-players table. Rows without both are skipped.
///
/// # Errors
///
/// Will return `Err` if the table lacks the id or name column
pub fn players_from_result_set(
    endpoint: &str,
    set: &ResultSet,
) -> Result<Vec<Player>, UpstreamError> {
    let missing = |column: &str| UpstreamError::MissingColumn {
        endpoint: endpoint.to_string(),
        column: column.to_string(),
    };
    let id_col = set.column_index(PERSON_ID).ok_or_else(|| missing(PERSON_ID))?;
    let name_col = set
        .column_index(DISPLAY_FIRST_LAST)
        .ok_or_else(|| missing(DISPLAY_FIRST_LAST))?;

    Ok(set
        .row_set
        .iter()
        .filter_map(|row| {
            let id = row.get(id_col)?.as_i64()?;
            let full_name = row.get(name_col)?.as_str()?;
            Some(Player {
                id,
                full_name: full_name.to_string(),
            })
        })
        .collect())
}
