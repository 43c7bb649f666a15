use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use spotifry_api::api::{create_router, AppState};
use spotifry_api::config::Config;
use spotifry_api::services::providers::{YtDlpExtractor, YtMusicCatalog};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let catalog = Arc::new(YtMusicCatalog::new(config.catalog_api_url.clone())?);
    let extractor = Arc::new(YtDlpExtractor::new(config.ytdlp_path.clone()));

    let state = AppState::new(catalog, extractor);
    let app = create_router(state, &config.cors_origin_list());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
