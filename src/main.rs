use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use courtside::args;
use courtside::controller::live::host_time_zone;
use courtside::controller::nba::{NbaClient, NbaClientConfig, StatsProvider, load_resolver};
use courtside::model::players_from_json;
use courtside::routes;
use courtside::state::AppState;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let args = args::args_checks();

    let client = NbaClient::new(NbaClientConfig {
        stats_base_url: args.stats_base_url.clone(),
        live_base_url: args.live_base_url.clone(),
        roster_season: args.season.clone(),
        timeout: args.upstream_timeout,
    })?;
    let provider: Arc<dyn StatsProvider> = Arc::new(client);

    // rosters are loaded once here and never refreshed
    let players = args.players_json.clone().map(players_from_json).transpose()?;
    let resolver = load_resolver(provider.as_ref(), players).await?;
    info!(
        teams = resolver.team_count(),
        players = resolver.player_count(),
        "rosters loaded"
    );

    let time_zone = host_time_zone();
    info!(%time_zone, "game times shown in host zone");

    let state = Data::new(AppState::new(
        resolver,
        provider,
        args.season.clone(),
        time_zone,
    ));
    let static_dir = args.static_dir.clone();

    info!(host = %args.host, port = args.port, season = %args.season, "starting server");
    HttpServer::new(move || {
        let app = App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes::configure);
        match &static_dir {
            Some(dir) => app.service(Files::new("/", dir).index_file("index.html")),
            None => app,
        }
    })
    .bind((args.host.as_str(), args.port))?
    .run()
    .await?;
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,courtside=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
