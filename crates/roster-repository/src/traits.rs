//! Repository trait definitions.

use async_trait::async_trait;
use roster_core::{NewUser, RosterResult, User, UserChanges, UserId};

/// User repository trait.
///
/// Lookups return `Option`/`bool`; turning an absent row into a not-found
/// error is the caller's decision.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns every user ordered by id.
    async fn find_all(&self) -> RosterResult<Vec<User>>;

    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> RosterResult<Option<User>>;

    /// Finds a user by exact email.
    async fn find_by_email(&self, email: &str) -> RosterResult<Option<User>>;

    /// Finds users whose name contains `fragment`, ordered by id.
    ///
    /// Follows SQLite `LIKE`: ASCII letters match regardless of case, while
    /// `%` and `_` in the fragment match literally.
    async fn search_by_name(&self, fragment: &str) -> RosterResult<Vec<User>>;

    /// Checks if an email exists.
    async fn exists_by_email(&self, email: &str) -> RosterResult<bool>;

    /// Inserts a new user and returns it with its assigned id.
    async fn save(&self, user: &NewUser) -> RosterResult<User>;

    /// Applies a partial update. Returns `None` when no row has this id.
    async fn update(&self, id: UserId, changes: &UserChanges) -> RosterResult<Option<User>>;

    /// Deletes a user by ID. Returns false when no row has this id.
    async fn delete(&self, id: UserId) -> RosterResult<bool>;
}
