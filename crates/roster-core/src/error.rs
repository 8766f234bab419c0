//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// SQLite extended result codes for constraint violations on a unique index.
#[cfg(feature = "sqlx")]
const SQLITE_UNIQUE_CODES: [&str; 2] = ["2067", "1555"];

/// Unified error type for all layers of Roster.
///
/// Every repository, service and handler returns this type; the REST layer
/// maps it onto an HTTP status with [`RosterError::status_code`].
#[derive(Error, Debug)]
pub enum RosterError {
    // ============ Domain Errors ============
    /// Resource not found
    #[error("{resource} not found: {key}")]
    NotFound { resource: &'static str, key: String },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Conflict error (e.g., duplicate entry)
    #[error("Conflict: {0}")]
    Conflict(String),

    // ============ Infrastructure Errors ============
    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RosterError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Validation(_) => 400,
            Self::Conflict(_) => 409,
            Self::Database(_) | Self::Configuration(_) | Self::Internal(_) | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Conflict(_) => "CONFLICT",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource: &'static str, key: T) -> Self {
        Self::NotFound {
            resource,
            key: key.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a conflict error.
    #[must_use]
    pub fn conflict<T: Into<String>>(message: T) -> Self {
        Self::Conflict(message.into())
    }

}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for RosterError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound {
                resource: "database_row",
                key: "unknown".to_string(),
            },
            sqlx::Error::Database(db_err) => {
                let unique_code = db_err
                    .code()
                    .is_some_and(|code| SQLITE_UNIQUE_CODES.iter().any(|c| *c == code));
                if db_err.is_unique_violation() || unique_code {
                    return Self::Conflict(db_err.message().to_string());
                }
                Self::Database(err.to_string())
            }
            _ => Self::Database(err.to_string()),
        }
    }
}

/// Serializable error response for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional field-level errors for validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldError {
    /// Field name
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
}

impl ErrorResponse {
    /// Creates a new error response from a `RosterError`.
    #[must_use]
    pub fn from_error(error: &RosterError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
            details: None,
        }
    }

    /// Sets field-level validation errors.
    #[must_use]
    pub fn with_details(mut self, details: Vec<FieldError>) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<&RosterError> for ErrorResponse {
    fn from(error: &RosterError) -> Self {
        Self::from_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(RosterError::not_found("User", 1).status_code(), 404);
        assert_eq!(RosterError::validation("name is required").status_code(), 400);
        assert_eq!(RosterError::conflict("Email already in use").status_code(), 409);
        assert_eq!(RosterError::Database("disk full".to_string()).status_code(), 500);
        assert_eq!(RosterError::Internal("oops".to_string()).status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(RosterError::not_found("User", 1).error_code(), "NOT_FOUND");
        assert_eq!(RosterError::validation("bad input").error_code(), "VALIDATION_ERROR");
        assert_eq!(RosterError::conflict("duplicate").error_code(), "CONFLICT");
        assert_eq!(RosterError::Database("db".to_string()).error_code(), "DATABASE_ERROR");
        assert_eq!(
            RosterError::Configuration("bad".to_string()).error_code(),
            "CONFIGURATION_ERROR"
        );
        assert_eq!(RosterError::Internal("err".to_string()).error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_not_found_message_names_resource_and_key() {
        let err = RosterError::not_found("User", "alice@example.com");
        assert_eq!(err.to_string(), "User not found: alice@example.com");
    }

    #[test]
    fn test_anyhow_is_wrapped_transparently() {
        let err: RosterError = anyhow::anyhow!("seed file missing").into();
        assert_eq!(err.to_string(), "seed file missing");
        assert_eq!(err.status_code(), 500);
    }

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err = RosterError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.status_code(), 404);
    }

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_pool_timeout_maps_to_database() {
        let err = RosterError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, RosterError::Database(_)));
    }

    #[test]
    fn test_error_response_from_error() {
        let err = RosterError::not_found("User", 1);
        let response = ErrorResponse::from_error(&err);
        assert_eq!(response.code, "NOT_FOUND");
        assert_eq!(response.message, "User not found: 1");
        assert!(response.details.is_none());
    }

    #[test]
    fn test_error_response_with_details() {
        let err = RosterError::validation("bad input");
        let details = vec![FieldError {
            field: "email".to_string(),
            message: "email is required".to_string(),
            code: "required".to_string(),
        }];
        let response = ErrorResponse::from(&err).with_details(details);
        assert_eq!(response.details.map(|d| d.len()), Some(1));
    }

    #[test]
    fn test_error_response_omits_empty_details() {
        let err = RosterError::conflict("Email already in use");
        let json = serde_json::to_value(ErrorResponse::from_error(&err)).unwrap();
        assert_eq!(json["code"], "CONFLICT");
        assert!(json.get("details").is_none());
    }
}
