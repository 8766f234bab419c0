//! Validated extractors for automatic request validation.
//!
//! `ValidatedJson<T>` and `ValidatedQuery<T>` deserialize a JSON body or a
//! query string and validate it with the `validator` crate. Every rejection
//! is answered with 400 Bad Request and an `ErrorResponse` body.

use roster_core::{collect_field_errors, ErrorResponse};
use axum::{
    async_trait,
    extract::{
        rejection::{JsonRejection, QueryRejection},
        FromRequest, FromRequestParts, Query, Request,
    },
    http::request::Parts,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

/// JSON extractor that automatically validates the deserialized value.
///
/// # Example
///
/// ```ignore
/// use roster_rest::extractors::ValidatedJson;
/// use roster_service::CreateUserRequest;
///
/// async fn create_user(ValidatedJson(request): ValidatedJson<CreateUserRequest>) {
///     // request carries a non-empty name and email here
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T> std::ops::Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Query string extractor that automatically validates the deserialized value.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedQuery<T>(pub T);

/// Rejection type for validated extraction.
#[derive(Debug)]
pub enum ValidatedRejection {
    /// JSON parsing/deserialization error.
    JsonError(JsonRejection),
    /// Query string deserialization error.
    QueryError(QueryRejection),
    /// Validation error with field-level details.
    ValidationError(ValidationErrors),
}

impl ValidatedRejection {
    fn to_error_response(&self) -> ErrorResponse {
        match self {
            Self::JsonError(rejection) => ErrorResponse {
                code: "INVALID_JSON".to_string(),
                message: format!("Invalid JSON: {}", rejection.body_text()),
                details: None,
            },
            Self::QueryError(rejection) => ErrorResponse {
                code: "INVALID_QUERY".to_string(),
                message: format!("Invalid query string: {}", rejection.body_text()),
                details: None,
            },
            Self::ValidationError(errors) => {
                let details = collect_field_errors(errors);
                let message = details
                    .iter()
                    .map(|e| e.message.as_str())
                    .collect::<Vec<_>>()
                    .join("; ");
                ErrorResponse {
                    code: "VALIDATION_ERROR".to_string(),
                    message,
                    details: Some(details),
                }
            }
        }
    }
}

impl IntoResponse for ValidatedRejection {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(self.to_error_response())).into_response()
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedRejection::JsonError)?;

        value
            .validate()
            .map_err(ValidatedRejection::ValidationError)?;

        Ok(ValidatedJson(value))
    }
}

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(ValidatedRejection::QueryError)?;

        value
            .validate()
            .map_err(ValidatedRejection::ValidationError)?;

        Ok(ValidatedQuery(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::header};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Probe {
        #[validate(required(message = "name is required"))]
        name: Option<String>,
    }

    fn json_request(body: &'static str) -> Request {
        axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_is_extracted() {
        let ValidatedJson(probe) =
            ValidatedJson::<Probe>::from_request(json_request(r#"{"name":"Carol"}"#), &())
                .await
                .unwrap();
        assert_eq!(probe.name.as_deref(), Some("Carol"));
    }

    #[tokio::test]
    async fn test_validation_failure_is_bad_request() {
        let rejection = ValidatedJson::<Probe>::from_request(json_request("{}"), &())
            .await
            .unwrap_err();

        let body = rejection.to_error_response();
        assert_eq!(body.code, "VALIDATION_ERROR");
        assert_eq!(body.message, "name is required");
        assert_eq!(body.details.map(|d| d.len()), Some(1));
        assert_eq!(rejection.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let rejection = ValidatedJson::<Probe>::from_request(json_request("{not json"), &())
            .await
            .unwrap_err();

        assert!(matches!(rejection, ValidatedRejection::JsonError(_)));
        assert_eq!(rejection.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_bad_request() {
        let request = axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(r#"{"name":"Carol"}"#))
            .unwrap();

        let rejection = ValidatedJson::<Probe>::from_request(request, &())
            .await
            .unwrap_err();
        assert_eq!(rejection.into_response().status(), StatusCode::BAD_REQUEST);
    }

    fn query_parts(uri: &'static str) -> Parts {
        axum::http::Request::builder()
            .uri(uri)
            .body(())
            .unwrap()
            .into_parts()
            .0
    }

    #[tokio::test]
    async fn test_query_is_extracted_and_validated() {
        let mut parts = query_parts("/search?name=Carol");
        let ValidatedQuery(probe) = ValidatedQuery::<Probe>::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(probe.name.as_deref(), Some("Carol"));

        let mut parts = query_parts("/search");
        let rejection = ValidatedQuery::<Probe>::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();
        assert!(matches!(rejection, ValidatedRejection::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_repeated_query_key_is_json_bad_request() {
        let mut parts = query_parts("/search?name=a&name=b");
        let rejection = ValidatedQuery::<Probe>::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();

        assert_eq!(rejection.to_error_response().code, "INVALID_QUERY");
        let response = rejection.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }
}
