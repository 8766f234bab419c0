//! User service implementations.

use crate::dto::{
    CreateUserRequest, UpdateUserRequest, UserEmailResponse, UserNameResponse, UserResponse,
};
use crate::user_service::UserService;
use async_trait::async_trait;
use roster_core::{RosterError, RosterResult, UserChanges, UserId, ValidateExt};
use roster_repository::UserRepository;
use std::sync::Arc;
use tracing::{debug, info};

/// User service backed by any [`UserRepository`].
pub struct UserServiceImpl<R: UserRepository> {
    user_repository: Arc<R>,
}

impl<R: UserRepository> UserServiceImpl<R> {
    /// Creates a new user service.
    pub fn new(user_repository: Arc<R>) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl<R: UserRepository + 'static> UserService for UserServiceImpl<R> {
    async fn list_users(&self) -> RosterResult<Vec<UserResponse>> {
        debug!("Listing users");

        let users = self.user_repository.find_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    async fn get_user(&self, id: UserId) -> RosterResult<UserResponse> {
        debug!("Getting user: {}", id);

        let user = self
            .user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| RosterError::not_found("User", id))?;

        Ok(UserResponse::from(user))
    }

    async fn get_user_by_email(&self, email: &str) -> RosterResult<UserResponse> {
        debug!("Getting user by email: {}", email);

        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| RosterError::not_found("User", email))?;

        Ok(UserResponse::from(user))
    }

    async fn search_users(&self, name: &str) -> RosterResult<Vec<UserResponse>> {
        debug!("Searching users by name: {}", name);

        if name.is_empty() {
            return Err(RosterError::validation("Parameter 'name' is required"));
        }

        let users = self.user_repository.search_by_name(name).await?;
        if users.is_empty() {
            return Err(RosterError::not_found("User", name));
        }

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    async fn create_user(&self, request: CreateUserRequest) -> RosterResult<UserResponse> {
        request.validate_request()?;
        let new_user = request.into_new_user()?;

        debug!("Creating user: {}", new_user.email);

        if self.user_repository.exists_by_email(&new_user.email).await? {
            return Err(RosterError::conflict("Email already in use"));
        }

        let saved_user = self.user_repository.save(&new_user).await?;

        info!("User created: {}", saved_user.id);
        Ok(UserResponse::from(saved_user))
    }

    async fn update_user(&self, id: UserId, request: UpdateUserRequest) -> RosterResult<UserResponse> {
        debug!("Updating user: {}", id);

        let changes = UserChanges::from(request);
        let updated_user = self
            .user_repository
            .update(id, &changes)
            .await?
            .ok_or_else(|| RosterError::not_found("User", id))?;

        info!("User updated: {}", id);
        Ok(UserResponse::from(updated_user))
    }

    async fn delete_user(&self, id: UserId) -> RosterResult<()> {
        debug!("Deleting user: {}", id);

        let deleted = self.user_repository.delete(id).await?;

        if !deleted {
            return Err(RosterError::not_found("User", id));
        }

        info!("User deleted: {}", id);
        Ok(())
    }

    async fn list_emails(&self) -> RosterResult<Vec<UserEmailResponse>> {
        debug!("Listing user emails");

        let users = self.user_repository.find_all().await?;
        Ok(users.into_iter().map(UserEmailResponse::from).collect())
    }

    async fn list_names(&self) -> RosterResult<Vec<UserNameResponse>> {
        debug!("Listing user names");

        let users = self.user_repository.find_all().await?;
        Ok(users.into_iter().map(UserNameResponse::from).collect())
    }
}
