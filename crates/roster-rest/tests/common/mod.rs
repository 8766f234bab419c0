//! Common test infrastructure for HTTP tests.
//!
//! Builds the full router over a private in-memory SQLite database seeded
//! with the two example users.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use roster_config::{DatabaseConfig, ServerConfig};
use roster_core::NewUser;
use roster_repository::{DatabasePool, SqliteUserRepository, UserRepository};
use roster_rest::{create_router, AppState};
use roster_service::UserServiceImpl;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// A router plus the pool it is wired to.
pub struct TestApp {
    pub router: Router,
    pub pool: Arc<DatabasePool>,
}

impl TestApp {
    /// Creates an app with Alice (id 1) and Bob (id 2) stored.
    pub async fn seeded() -> Self {
        let app = Self::empty().await;
        let repo = SqliteUserRepository::new(Arc::clone(&app.pool));
        for (name, email) in [
            ("Alice Johnson", "alice@example.com"),
            ("Bob Smith", "bob@example.com"),
        ] {
            repo.save(&NewUser::new(name, email))
                .await
                .expect("Failed to seed user");
        }
        app
    }

    /// Creates an app over an empty `users` table.
    pub async fn empty() -> Self {
        let pool = DatabasePool::new(&DatabaseConfig::in_memory())
            .await
            .expect("Failed to open in-memory database");
        pool.ensure_schema().await.expect("Failed to create schema");
        let pool = Arc::new(pool);

        let repository = Arc::new(SqliteUserRepository::new(Arc::clone(&pool)));
        let user_service = Arc::new(UserServiceImpl::new(repository));
        let state = AppState::new(user_service, pool.clone());

        Self {
            router: create_router(state, &ServerConfig::default()),
            pool,
        }
    }

    /// Sends a request and returns the status and parsed JSON body
    /// (`Value::Null` for an empty body).
    pub async fn send(&self, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).expect("Failed to build request"))
            .await
            .expect("Router failed");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();

        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }
}
