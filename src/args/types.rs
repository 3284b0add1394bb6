use clap::Parser;
use serde_json::Value;
use std::path::PathBuf;
use std::time::Duration;

use crate::controller::nba::{DEFAULT_SEASON, LIVE_BASE_URL, STATS_BASE_URL};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(long, env = "COURTSIDE_HOST", default_value = "0.0.0.0")]
    pub host: String,
    #[arg(short = 'p', long, env = "COURTSIDE_PORT", default_value_t = 5000)]
    pub port: u16,
    /// Season searched by /get_team_games and used for the player roster, e.g. 2022-23.
    #[arg(
        short = 's',
        long,
        env = "COURTSIDE_SEASON",
        default_value = DEFAULT_SEASON,
        value_parser = crate::args::validation::check_season
    )]
    pub season: String,
    #[arg(long, env = "COURTSIDE_STATS_BASE_URL", default_value = STATS_BASE_URL)]
    pub stats_base_url: String,
    #[arg(long, env = "COURTSIDE_LIVE_BASE_URL", default_value = LIVE_BASE_URL)]
    pub live_base_url: String,
    /// Json array of {"id", "full_name"}. When absent the roster is fetched at startup.
    #[arg(
        long,
        env = "COURTSIDE_PLAYERS_FILE",
        value_name = "PLAYERS_JSON",
        value_parser = crate::args::validation::check_readable_file_and_json
    )]
    pub players_file: Option<Value>,
    /// Client build to serve at / alongside the api.
    #[arg(
        long,
        env = "COURTSIDE_STATIC_DIR",
        value_parser = crate::args::validation::check_directory
    )]
    pub static_dir: Option<PathBuf>,
    /// Per-request upstream timeout; 0 waits forever.
    #[arg(long, env = "COURTSIDE_UPSTREAM_TIMEOUT_SECS", default_value_t = 30)]
    pub upstream_timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub host: String,
    pub port: u16,
    pub season: String,
    pub stats_base_url: String,
    pub live_base_url: String,
    pub players_json: Option<Value>,
    pub static_dir: Option<PathBuf>,
    pub upstream_timeout: Option<Duration>,
}

impl From<Args> for CleanArgs {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            season: args.season,
            stats_base_url: args.stats_base_url,
            live_base_url: args.live_base_url,
            players_json: args.players_file,
            static_dir: args.static_dir,
            upstream_timeout: (args.upstream_timeout_secs > 0)
                .then(|| Duration::from_secs(args.upstream_timeout_secs)),
        }
    }
}
