//! SQLite user repository implementation.

use crate::{traits::UserRepository, DatabasePool};
use async_trait::async_trait;
use roster_core::{NewUser, RosterError, RosterResult, User, UserChanges, UserId};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// SQLite user repository implementation.
#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: Arc<DatabasePool>,
}

impl SqliteUserRepository {
    /// Creates a new SQLite user repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(UserId::new(row.id), row.name, row.email)
    }
}

/// Builds a `LIKE` pattern matching `fragment` anywhere, with `\` escaping
/// the wildcard characters.
fn contains_pattern(fragment: &str) -> String {
    let mut pattern = String::with_capacity(fragment.len() + 2);
    pattern.push('%');
    for c in fragment.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_all(&self) -> RosterResult<Vec<User>> {
        debug!("Finding all users");

        let rows = sqlx::query_as::<_, UserRow>("SELECT id, name, email FROM users ORDER BY id")
            .fetch_all(self.pool.inner())
            .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: UserId) -> RosterResult<Option<User>> {
        debug!("Finding user by id: {}", id);

        let row = sqlx::query_as::<_, UserRow>("SELECT id, name, email FROM users WHERE id = ?")
            .bind(id.into_inner())
            .fetch_optional(self.pool.inner())
            .await?;

        Ok(row.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> RosterResult<Option<User>> {
        debug!("Finding user by email: {}", email);

        let row = sqlx::query_as::<_, UserRow>("SELECT id, name, email FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(self.pool.inner())
            .await?;

        Ok(row.map(User::from))
    }

    async fn search_by_name(&self, fragment: &str) -> RosterResult<Vec<User>> {
        debug!("Searching users by name fragment: {}", fragment);

        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email
            FROM users
            WHERE name LIKE ? ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(contains_pattern(fragment))
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn exists_by_email(&self, email: &str) -> RosterResult<bool> {
        let result: Option<i32> = sqlx::query_scalar("SELECT 1 FROM users WHERE email = ? LIMIT 1")
            .bind(email)
            .fetch_optional(self.pool.inner())
            .await?;

        Ok(result.is_some())
    }

    async fn save(&self, user: &NewUser) -> RosterResult<User> {
        debug!("Saving new user: {}", user.email);

        let result = sqlx::query("INSERT INTO users (name, email) VALUES (?, ?)")
            .bind(&user.name)
            .bind(&user.email)
            .execute(self.pool.inner())
            .await?;

        let id = UserId::new(result.last_insert_rowid());
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RosterError::Internal("Failed to fetch inserted user".to_string()))
    }

    async fn update(&self, id: UserId, changes: &UserChanges) -> RosterResult<Option<User>> {
        debug!("Updating user: {}", id);

        let result = sqlx::query(
            r#"
            UPDATE users
            SET name = COALESCE(?, name),
                email = COALESCE(?, email)
            WHERE id = ?
            "#,
        )
        .bind(changes.name.as_deref())
        .bind(changes.email.as_deref())
        .bind(id.into_inner())
        .execute(self.pool.inner())
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    async fn delete(&self, id: UserId) -> RosterResult<bool> {
        debug!("Deleting user: {}", id);

        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl std::fmt::Debug for SqliteUserRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteUserRepository").finish_non_exhaustive()
    }
}
