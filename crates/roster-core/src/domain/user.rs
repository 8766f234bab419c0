//! User entity.

use crate::UserId;
use serde::{Deserialize, Serialize};

/// A stored user record.
///
/// Both `name` and `email` are unique across the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Identifier assigned by the storage engine.
    pub id: UserId,

    /// Display name.
    pub name: String,

    /// Email address, matched exactly on lookup.
    pub email: String,
}

impl User {
    /// Creates a user from already persisted values.
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Values for a user that has not been inserted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl NewUser {
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// A partial update. `None` leaves the stored column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserChanges {
    /// Builds a change set, treating empty strings as "not supplied".
    #[must_use]
    pub fn new(name: Option<String>, email: Option<String>) -> Self {
        Self {
            name: name.filter(|n| !n.is_empty()),
            email: email.filter(|e| !e.is_empty()),
        }
    }

    /// Returns true when no column would change.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }

    /// Applies the change set to an in-memory record.
    #[must_use]
    pub fn apply(self, mut user: User) -> User {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        user
    }
}
