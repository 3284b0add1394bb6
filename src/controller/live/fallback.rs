use crate::model::FallbackGame;

/// Served by `/get_live_games` when the scoreboard is empty (off-season, off days).
/// Times are left in UTC under `gameTimeUTC`; they are not localized like live games.
pub static FALLBACK_LIVE_GAMES: [FallbackGame; 10] = [
    game("0022000207", "Spurs", "Trail Blazers", "2021-01-18T20:00:00Z"),
    game("0022000205", "Timberwolves", "Hawks", "2021-01-18T19:30:00Z"),
    game("0022000203", "Magic", "Knicks", "2021-01-18T17:00:00Z"),
    game("0022000204", "Cavaliers", "Wizards", "2021-01-18T19:00:00Z"),
    game("0022000208", "Suns", "Grizzlies", "2021-01-18T22:00:00Z"),
    game("0022000209", "Bucks", "Nets", "2021-01-19T00:30:00Z"),
    game("0022000210", "Mavericks", "Raptors", "2021-01-19T00:30:00Z"),
    game("0022000206", "Pistons", "Heat", "2021-01-19T01:00:00Z"),
    game("0022000211", "Rockets", "Bulls", "2021-01-19T01:00:00Z"),
    game("0022000212", "Warriors", "Lakers", "2021-01-19T03:00:00Z"),
];

const fn game(
    game_id: &'static str,
    away_team: &'static str,
    home_team: &'static str,
    game_time_utc: &'static str,
) -> FallbackGame {
    FallbackGame {
        game_id,
        away_team,
        home_team,
        game_time_utc,
    }
}
