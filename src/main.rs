use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use movie_store::api::{create_router, AppState};
use movie_store::config::Config;
use movie_store::db::{create_redis_client, DocumentStore, InMemoryDocumentStore, RedisDocumentStore};
use movie_store::services::{CatalogStore, TmdbProvider};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("movie_store=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let store: Arc<dyn DocumentStore> = match &config.redis_url {
        Some(redis_url) => {
            let client = create_redis_client(redis_url)?;
            Arc::new(RedisDocumentStore::new(client).await?)
        }
        None => {
            tracing::warn!("REDIS_URL not set, genre catalogs are kept in memory");
            Arc::new(InMemoryDocumentStore::new())
        }
    };

    let provider = Arc::new(TmdbProvider::new(
        config.tmdb_api_key.clone(),
        config.tmdb_api_url.clone(),
    ));
    let catalog = CatalogStore::new(provider, store);

    if config.populate_on_start {
        let report = catalog.populate_all().await;
        tracing::info!(
            populated = report.populated.len(),
            failed = report.failed.len(),
            "Startup populate finished"
        );
    }

    // Initialize application state
    let state = AppState::new(catalog);

    // Create the router with all routes
    let app = create_router(state);

    // Start the server
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %config.bind_addr(), "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
