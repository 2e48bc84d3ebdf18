// main.rs only boots the router and server

mod handlers;
mod metrics;
mod models;
mod router;
mod state;
mod templates;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use podium::config::Config;
use podium::logging;
use podium_core::CompetitionAggregator;

use crate::models::ProfileView;
use crate::state::AppState;

#[derive(Parser)]
#[command(name = "podium-web")]
#[command(about = "Serve the profile page with its competition history")]
struct Cli {
    /// Config file (defaults to $PODIUM_CONFIG or podium.toml)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Port to listen on (defaults to $PORT or 3000)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => {
            let mut config = Config::load_from(path)?;
            config.apply_env_overrides();
            config
        }
        None => Config::load()?,
    };

    // The competition list is a static snapshot, loaded once at start-up
    let aggregator = CompetitionAggregator::from_source(&config.record_source(), config.aggregator_settings())
        .with_context(|| format!("loading {}", config.competitions.data_path.display()))?;
    info!(records = aggregator.total(), "Competition history loaded");

    let app_state = AppState {
        aggregator: Arc::new(aggregator),
        profile: Arc::new(ProfileView::from(&config.profile)),
        metrics: crate::metrics::init_metrics(),
    };

    let app = router::app_router(app_state);

    let port: u16 = cli
        .port
        .or_else(|| std::env::var("PORT").ok().and_then(|s| s.parse().ok()))
        .unwrap_or(3000);
    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {}", bind_addr))?;

    info!("Web server listening on {} (visit http://127.0.0.1:{})", bind_addr, port);
    axum::serve(listener, app).await?;
    Ok(())
}
