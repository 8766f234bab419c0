//! Application assembly.

use crate::bootstrap::bootstrap_database;
use axum::Router;
use roster_config::{AppConfig, SeedUser};
use roster_core::RosterResult;
use roster_repository::{create_pool, DatabasePool, SqliteUserRepository};
use roster_rest::{create_router, AppState};
use roster_service::UserServiceImpl;
use std::sync::Arc;
use tracing::info;

/// A fully wired application.
pub struct Application {
    pub router: Router,
    pub pool: Arc<DatabasePool>,
}

impl Application {
    /// Opens the database, bootstraps it and builds the router.
    ///
    /// Seeding only runs when `bootstrap.seed_on_startup` is set; the schema
    /// is always ensured.
    pub async fn build(config: &AppConfig) -> RosterResult<Self> {
        let pool = create_pool(&config.database).await?;
        let repository = Arc::new(SqliteUserRepository::new(Arc::clone(&pool)));

        let seeds: &[SeedUser] = if config.bootstrap.seed_on_startup {
            config.bootstrap.users.as_slice()
        } else {
            info!("Startup seeding disabled");
            &[]
        };
        bootstrap_database(&pool, repository.as_ref(), seeds).await?;

        let user_service = Arc::new(UserServiceImpl::new(repository));
        let state = AppState::new(user_service, pool.clone());
        let router = create_router(state, &config.server);

        Ok(Self { router, pool })
    }
}
