//! Buildings API server: loads config, prepares the database, serves HTTP until Ctrl-C.

use buildings_api::{
    app,
    config,
    ensure_buildings_table,
    ensure_database_exists,
    AppState,
    BuildingRepository,
    PgBuildingRepository,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("buildings_api=info,tower_http=info")),
        )
        .init();

    let config = config::load()?;
    tracing::info!(database = ?config.database, "config loaded");

    if let Err(e) = ensure_database_exists(&config.database).await {
        tracing::warn!(error = %e, "could not verify database exists, connecting anyway");
    }
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect_with(config.database.connect_options())
        .await?;
    ensure_buildings_table(&pool, &config.database.schema, &config.database.table).await?;

    let repo = Arc::new(PgBuildingRepository::new(
        pool,
        &config.database.schema,
        &config.database.table,
    ));
    let state = AppState::new(repo.clone());

    let listener = TcpListener::bind(&config.server.addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    repo.close().await;
    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
