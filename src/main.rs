//! Server entry point: reads config, builds the store, mounts the routes.

use carros_api::{app, ensure_database_exists, AppState, MemoryCarStore, PgCarStore, ServerConfig, StoreBackend};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("carros_api=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let state = match config.store {
        StoreBackend::Postgres => {
            ensure_database_exists(&config.database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(&config.database_url)
                .await?;
            let store = PgCarStore::new(pool);
            store.ensure_table().await?;
            AppState::new(store)
        }
        StoreBackend::Memory => AppState::new(MemoryCarStore::new()),
    };
    tracing::info!(backend = state.store.backend(), "store ready");

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state, config.max_body_bytes))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
