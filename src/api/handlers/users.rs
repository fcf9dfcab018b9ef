//! Handlers for the user CRUD endpoints.
//!
//! Each handler validates all of its input first, then performs exactly one
//! persistence call, then maps the result. A failure at any step ends the
//! request; nothing is retried.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};

use crate::api::dto::user::{DELETED_MSG, MessageResponse, UserRequest, UserResponse};
use crate::api::validation::{parse_path_id, parse_user_body};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a user.
///
/// # Endpoint
///
/// `POST /user`
///
/// # Request Body
///
/// ```json
/// { "name": "andy" }
/// ```
///
/// # Errors
///
/// Returns 400 if the name is missing, longer than 20 characters, or not alphabetic.
/// Returns 500 on database errors.
pub async fn create_user_handler(
    State(state): State<AppState>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let name = parse_user_body(payload)?;

    let user = state.user_service.create_user(&name).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Fetches a single user.
///
/// # Endpoint
///
/// `GET /user/{user_id}`
///
/// # Errors
///
/// Returns 400 if `user_id` is not a 32-bit integer.
/// Returns 404 if no user has this id.
/// Returns 500 on database errors.
pub async fn get_user_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<UserResponse>, AppError> {
    let user_id = parse_path_id(path)?;

    let user = state.user_service.get_user(user_id).await?;

    Ok(Json(user.into()))
}

/// Renames a user.
///
/// # Endpoint
///
/// `PUT /user/{user_id}`
///
/// The id is validated before the body; persistence is only attempted once
/// both are valid.
///
/// # Errors
///
/// Returns 400 if `user_id` or `name` is invalid.
/// Returns 404 if no user has this id.
/// Returns 500 on database errors.
pub async fn update_user_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, AppError> {
    let user_id = parse_path_id(path)?;
    let name = parse_user_body(payload)?;

    let user = state.user_service.update_user(user_id, &name).await?;

    Ok(Json(user.into()))
}

/// Permanently deletes a user.
///
/// # Endpoint
///
/// `DELETE /user/{user_id}`
///
/// # Response
///
/// ```json
/// { "message": "Deleted successfully" }
/// ```
///
/// # Errors
///
/// Returns 400 if `user_id` is not a 32-bit integer.
/// Returns 404 if no user has this id.
/// Returns 500 on database errors.
pub async fn delete_user_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let user_id = parse_path_id(path)?;

    state.user_service.delete_user(user_id).await?;

    Ok(Json(MessageResponse {
        message: DELETED_MSG,
    }))
}

/// Lists all users ordered by ascending id.
///
/// # Endpoint
///
/// `GET /user`
///
/// # Response
///
/// ```json
/// [{ "user_id": 1, "name": "andy" }, { "user_id": 2, "name": "bob" }]
/// ```
///
/// # Errors
///
/// Returns 404 when no users exist. Existing clients rely on this instead of
/// an empty array.
/// Returns 500 on database errors.
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.user_service.list_users().await?;

    if users.is_empty() {
        return Err(AppError::users_unavailable());
    }

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
