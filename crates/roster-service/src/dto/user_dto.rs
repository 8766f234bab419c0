//! User-related DTOs.

use roster_core::{NewUser, RosterError, RosterResult, User, UserChanges, UserId};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Request to create a new user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name cannot be empty")
    )]
    #[schema(example = "Carol")]
    pub name: Option<String>,

    #[validate(
        required(message = "email is required"),
        length(min = 1, message = "email cannot be empty")
    )]
    #[schema(example = "carol@example.com")]
    pub email: Option<String>,
}

impl CreateUserRequest {
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    /// Converts a validated request into insertable values.
    pub fn into_new_user(self) -> RosterResult<NewUser> {
        match (self.name, self.email) {
            (Some(name), Some(email)) if !name.is_empty() && !email.is_empty() => {
                Ok(NewUser { name, email })
            }
            _ => Err(RosterError::validation("name and email are required")),
        }
    }
}

/// Request to partially update a user.
///
/// Absent or empty fields leave the stored value unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[serde(default)]
    #[schema(example = "Carol")]
    pub name: Option<String>,

    #[serde(default)]
    #[schema(example = "carol2@example.com")]
    pub email: Option<String>,
}

impl From<UpdateUserRequest> for UserChanges {
    fn from(request: UpdateUserRequest) -> Self {
        UserChanges::new(request.name, request.email)
    }
}

/// Query string for the name search endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Substring to look for in user names.
    #[validate(
        required(message = "Parameter 'name' is required"),
        length(min = 1, message = "Parameter 'name' is required")
    )]
    pub name: Option<String>,
}

/// User response DTO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Email-only projection of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserEmailResponse {
    pub email: String,
}

impl From<User> for UserEmailResponse {
    fn from(user: User) -> Self {
        Self { email: user.email }
    }
}

/// Name-only projection of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserNameResponse {
    pub name: String,
}

impl From<User> for UserNameResponse {
    fn from(user: User) -> Self {
        Self { name: user.name }
    }
}
