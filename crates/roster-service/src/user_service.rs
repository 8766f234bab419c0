//! User service trait definition.

use crate::dto::{
    CreateUserRequest, UpdateUserRequest, UserEmailResponse, UserNameResponse, UserResponse,
};
use async_trait::async_trait;
use roster_core::{RosterResult, UserId};

/// User service trait.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Lists all users in id order.
    async fn list_users(&self) -> RosterResult<Vec<UserResponse>>;

    /// Gets a user by ID.
    async fn get_user(&self, id: UserId) -> RosterResult<UserResponse>;

    /// Gets a user by exact email.
    async fn get_user_by_email(&self, email: &str) -> RosterResult<UserResponse>;

    /// Finds users whose name contains `name`.
    ///
    /// An empty result is reported as not found.
    async fn search_users(&self, name: &str) -> RosterResult<Vec<UserResponse>>;

    /// Creates a new user. Fails with a conflict when the email is taken.
    async fn create_user(&self, request: CreateUserRequest) -> RosterResult<UserResponse>;

    /// Updates the supplied fields of a user.
    async fn update_user(&self, id: UserId, request: UpdateUserRequest) -> RosterResult<UserResponse>;

    /// Deletes a user.
    async fn delete_user(&self, id: UserId) -> RosterResult<()>;

    /// Lists every user's email.
    async fn list_emails(&self) -> RosterResult<Vec<UserEmailResponse>>;

    /// Lists every user's name.
    async fn list_names(&self) -> RosterResult<Vec<UserNameResponse>>;
}
