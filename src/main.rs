use std::net::SocketAddr;

use esteira::cache::QueryCache;
use esteira::config::AppConfig;
use esteira::notion::NotionClient;
use esteira::{app, AppState};
use mimalloc::MiMalloc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "esteira=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let config = AppConfig::from_env();
    if config.credential.is_missing() {
        tracing::warn!(
            "No Notion token found; the dashboard will start but every fetch will fail \
             until NOTION_TOKEN or a token file is provided"
        );
    }

    let notion = NotionClient::new(&config.notion_base_url, config.credential.clone())?;
    let cache = QueryCache::new(config.cache_ttl);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(host = %addr, "Starting Esteira dashboard server");

    let state = AppState {
        config,
        notion,
        cache,
    };

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
