use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info};

use matchup_odds::analysis::Analyzer;
use matchup_odds::config::AppConfig;
use matchup_odds::football_data::FootballDataClient;
use matchup_odds::logging::init_logging;
use matchup_odds::server;

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    init_logging();

    let config = AppConfig::from_env();
    if config.api.api_key.is_none() {
        info!("FOOTBALL_DATA_API_KEY is not set; upstream requests will be unauthenticated");
    }

    // The blocking client owns its own runtime and must be created and dropped
    // outside of tokio.
    let provider = FootballDataClient::new(&config.api)?;
    let bind_addr = config.bind_addr.clone();
    let analyzer = Arc::new(Analyzer::new(provider, config));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start tokio runtime")?;
    let res = runtime.block_on(serve(Arc::clone(&analyzer), &bind_addr));
    drop(runtime);
    drop(analyzer);

    if let Err(err) = &res {
        error!("server error: {err:#}");
    }
    res
}

async fn serve(analyzer: Arc<Analyzer<FootballDataClient>>, bind_addr: &str) -> Result<()> {
    let app = server::router(analyzer);
    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("http server failed")?;
    info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        error!("failed to install Ctrl+C handler: {err}");
    }
}
