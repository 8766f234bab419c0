//! Integration tests for DatabasePool against file-backed databases.

use roster_config::DatabaseConfig;
use roster_core::{HealthCheck, NewUser};
use roster_repository::{create_pool, DatabasePool, SqliteUserRepository, UserRepository};
use std::time::Duration;

fn file_config(path: &std::path::Path) -> DatabaseConfig {
    DatabaseConfig {
        url: format!("sqlite://{}", path.display()),
        ..DatabaseConfig::default()
    }
}

#[tokio::test]
async fn test_creates_database_file_on_first_connect() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("database.db");
    assert!(!path.exists());

    let pool = DatabasePool::new(&file_config(&path)).await.expect("connect");
    pool.ensure_schema().await.expect("schema");

    assert!(path.exists(), "database file should have been created");

    let tables: Vec<String> =
        sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type='table' AND name='users'")
            .fetch_all(pool.inner())
            .await
            .expect("query");
    assert_eq!(tables, vec!["users".to_string()]);
}

#[tokio::test]
async fn test_missing_file_is_error_without_create_if_missing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.db");

    let config = DatabaseConfig {
        create_if_missing: false,
        ..file_config(&path)
    };

    assert!(DatabasePool::new(&config).await.is_err());
}

#[tokio::test]
async fn test_ensure_schema_is_idempotent_and_keeps_rows() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("database.db");

    let pool = create_pool(&file_config(&path)).await.expect("connect");
    pool.ensure_schema().await.expect("schema");

    let repo = SqliteUserRepository::new(pool.clone());
    repo.save(&NewUser::new("Carol", "carol@example.com"))
        .await
        .expect("save");

    pool.ensure_schema().await.expect("schema again");
    assert_eq!(repo.find_all().await.expect("find_all").len(), 1);
    pool.close().await;

    let reopened = create_pool(&file_config(&path)).await.expect("reconnect");
    let repo = SqliteUserRepository::new(reopened);
    assert_eq!(repo.find_all().await.expect("find_all").len(), 1);
}

#[tokio::test]
async fn test_health_check_reports_state() {
    let pool = DatabasePool::new(&DatabaseConfig::in_memory())
        .await
        .expect("connect");

    assert!(pool.health_check().await.is_ok());
    assert_eq!(pool.name(), "database");
    assert!(pool.check().await.is_healthy());

    pool.close().await;
    assert!(!pool.check().await.is_healthy());
}

#[tokio::test]
async fn test_file_pool_uses_configured_lifetimes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = DatabaseConfig {
        idle_timeout_secs: 90,
        max_lifetime_secs: 120,
        ..file_config(&dir.path().join("database.db"))
    };

    let pool = DatabasePool::new(&config).await.expect("connect");
    let options = pool.inner().options();

    assert_eq!(options.get_idle_timeout(), Some(Duration::from_secs(90)));
    assert_eq!(options.get_max_lifetime(), Some(Duration::from_secs(120)));
}

#[tokio::test]
async fn test_in_memory_pool_never_expires_connections() {
    let pool = DatabasePool::new(&DatabaseConfig::in_memory())
        .await
        .expect("connect");
    let options = pool.inner().options();

    assert_eq!(options.get_idle_timeout(), None);
    assert_eq!(options.get_max_lifetime(), None);
}
