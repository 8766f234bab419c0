//! User management controller.

use crate::{
    extractors::{ValidatedJson, ValidatedQuery},
    responses::{created, no_content, ok, ApiResult, AppError},
    state::AppState,
};
use roster_core::{ErrorResponse, RosterError, UserId};
use roster_service::{
    CreateUserRequest, SearchQuery, UpdateUserRequest, UserEmailResponse, UserNameResponse,
    UserResponse,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::debug;

/// Creates the user router.
///
/// The collection answers with and without the trailing slash. Static
/// segments such as `emails` take priority over the `:id` capture.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route("/api/users/", get(list_users).post(create_user))
        .route("/api/users/emails", get(list_emails))
        .route("/api/users/names", get(list_names))
        .route("/api/users/search", get(search_users))
        .route("/api/users/email/:email", get(get_user_by_email))
        .route(
            "/api/users/:id",
            get(get_user).patch(update_user).delete(delete_user),
        )
}

/// An id that is not an integer cannot name a stored user.
fn parse_user_id(id: &str) -> Result<UserId, AppError> {
    UserId::parse(id).map_err(|_| AppError(RosterError::not_found("User", id)))
}

/// List all users.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    responses(
        (status = 200, description = "All users in id order", body = [UserResponse])
    )
)]
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Vec<UserResponse>> {
    debug!("List users request");

    let users = state.user_service.list_users().await?;
    ok(users)
}

/// Create a new user.
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Missing or empty field", body = ErrorResponse),
        (status = 409, description = "Email or name already in use", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    debug!("Create user request: {:?}", request.email);

    let user = state.user_service.create_user(request).await?;
    Ok(created(user))
}

/// Get a user by ID.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<UserResponse> {
    debug!("Get user request: {}", id);

    let user_id = parse_user_id(&id)?;
    let user = state.user_service.get_user(user_id).await?;
    ok(user)
}

/// Partially update a user.
#[utoipa::path(
    patch,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "Email or name already in use", body = ErrorResponse)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<UserResponse> {
    debug!("Update user request: {}", id);

    let user_id = parse_user_id(&id)?;
    let user = state.user_service.update_user(user_id, request).await?;
    ok(user)
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    debug!("Delete user request: {}", id);

    let user_id = parse_user_id(&id)?;
    state.user_service.delete_user(user_id).await?;

    Ok(no_content())
}

/// Get a user by exact email.
#[utoipa::path(
    get,
    path = "/api/users/email/{email}",
    tag = "users",
    params(("email" = String, Path, description = "Exact email address")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn get_user_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> ApiResult<UserResponse> {
    debug!("Get user by email request: {}", email);

    let user = state.user_service.get_user_by_email(&email).await?;
    ok(user)
}

/// Search users whose name contains a fragment.
#[utoipa::path(
    get,
    path = "/api/users/search",
    tag = "users",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching users", body = [UserResponse]),
        (status = 400, description = "Missing or malformed name parameter", body = ErrorResponse),
        (status = 404, description = "No user matches", body = ErrorResponse)
    )
)]
pub async fn search_users(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<SearchQuery>,
) -> ApiResult<Vec<UserResponse>> {
    debug!("Search users request: {:?}", query.name);

    let name = query.name.unwrap_or_default();

    let users = state.user_service.search_users(&name).await?;
    ok(users)
}

/// List every user's email.
#[utoipa::path(
    get,
    path = "/api/users/emails",
    tag = "users",
    responses(
        (status = 200, description = "Emails in id order", body = [UserEmailResponse])
    )
)]
pub async fn list_emails(State(state): State<AppState>) -> ApiResult<Vec<UserEmailResponse>> {
    debug!("List emails request");

    let emails = state.user_service.list_emails().await?;
    ok(emails)
}

/// List every user's name.
#[utoipa::path(
    get,
    path = "/api/users/names",
    tag = "users",
    responses(
        (status = 200, description = "Names in id order", body = [UserNameResponse])
    )
)]
pub async fn list_names(State(state): State<AppState>) -> ApiResult<Vec<UserNameResponse>> {
    debug!("List names request");

    let names = state.user_service.list_names().await?;
    ok(names)
}
