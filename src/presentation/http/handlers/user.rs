//! User Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::application::dto::request::{DeleteUserRequest, SaveUserRequest};
use crate::application::dto::response::UserResponse;
use crate::application::services::UserError;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Translate service errors into the response taxonomy.
fn map_user_error(e: UserError) -> AppError {
    match e {
        UserError::NotFound => AppError::NotFound("User not found".into()),
        UserError::Conflict(msg) => AppError::Conflict(msg),
        UserError::Unavailable(msg) => AppError::BackendUnavailable(msg),
        UserError::Internal(msg) => AppError::Internal(msg),
    }
}

/// List all users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.users.find_all().await.map_err(map_user_error)?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Get user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state
        .users
        .find_one(&user_id)
        .await
        .map_err(map_user_error)?;

    Ok(Json(UserResponse::from(user)))
}

/// Get user by email address
pub async fn get_user_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state
        .users
        .find_by_email(&email)
        .await
        .map_err(map_user_error)?;

    Ok(Json(UserResponse::from(user)))
}

/// Save (upsert) a user
pub async fn save_user(
    State(state): State<AppState>,
    Json(body): Json<SaveUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    // Validate request
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let saved = state
        .users
        .save(body.into_user())
        .await
        .map_err(map_user_error)?;

    Ok(Json(UserResponse::from(saved)))
}

/// Delete a user; the request body carries the entire entity
pub async fn delete_user(
    State(state): State<AppState>,
    Json(body): Json<DeleteUserRequest>,
) -> Result<StatusCode, AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    state
        .users
        .delete(body.into_user())
        .await
        .map_err(map_user_error)?;

    Ok(StatusCode::NO_CONTENT)
}
