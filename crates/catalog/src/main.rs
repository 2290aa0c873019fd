use anyhow::{Context, Result};
use catalog::{handler::AppRouter, state::AppState};
use dotenv::dotenv;
use shared::{
    config::{Config, ConnectionManager, ConnectionPool},
    utils::init_logger,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    let enable_file_log = std::env::var("ENABLE_FILE_LOG")
        .map(|v| v == "true")
        .unwrap_or(false);

    init_logger("catalog", is_dev, enable_file_log);

    let config = Config::init().context("Failed to load configuration")?;

    let pool = ConnectionManager::new_pool(&config.database_url)
        .await
        .context("Failed to initialize database pool")?;

    if config.run_migrations {
        run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;
    }

    let state = AppState::new(pool);

    info!("🚀 Starting catalog service on port {}", config.port);

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("✅ Catalog service shutdown complete.");

    Ok(())
}

async fn run_migrations(pool: &ConnectionPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
