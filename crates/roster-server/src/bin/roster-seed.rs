//! Creates the `users` table and inserts the configured seed users, then
//! exits. Safe to run repeatedly.

use anyhow::Context;
use roster_config::ConfigLoader;
use roster_core::telemetry::init_telemetry;
use roster_repository::{create_pool, SqliteUserRepository};
use roster_server::bootstrap::bootstrap_database;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigLoader::from_default_location()
        .context("Failed to load configuration")?
        .get();

    init_telemetry(&config.observability).context("Failed to initialize logging")?;

    let pool = create_pool(&config.database)
        .await
        .with_context(|| format!("Failed to open {}", config.database.url))?;
    let repository = SqliteUserRepository::new(Arc::clone(&pool));

    let inserted = bootstrap_database(&pool, &repository, &config.bootstrap.users)
        .await
        .context("Failed to seed database")?;

    info!(
        "Seeded {} of {} users into {}",
        inserted,
        config.bootstrap.users.len(),
        config.database.url
    );

    pool.close().await;
    Ok(())
}
