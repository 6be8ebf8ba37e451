use std::sync::Arc;

use ensemble_api::{
    config::Config,
    db,
    routes::{create_router, AppState},
    services::providers::{CatalogProvider, PostgresCatalog, PostgresFeedbackStore, RestCatalog},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let db_pool = db::create_pool(&config.database_url).await?;
    db::run_migrations(&db_pool).await?;

    let catalog: Arc<dyn CatalogProvider> = match config.catalog_provider.as_str() {
        "rest" => {
            let redis_client = db::create_redis_client(&config.redis_url)?;
            let cache = db::Cache::new(redis_client);
            tracing::info!(api_url = %config.catalog_api_url, "Using REST catalog provider");
            Arc::new(RestCatalog::new(
                cache,
                config.catalog_api_url.clone(),
                config.catalog_api_key.clone(),
            ))
        }
        _ => {
            tracing::info!("Using Postgres catalog provider");
            Arc::new(PostgresCatalog::new(db_pool.clone()))
        }
    };

    let feedback = Arc::new(PostgresFeedbackStore::new(db_pool));

    let state = Arc::new(AppState { catalog, feedback });
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "ensemble-api listening");
    axum::serve(listener, app).await?;

    Ok(())
}
