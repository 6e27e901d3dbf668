//! User API handlers

use axum::{
    extract::{OriginalUri, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use super::error::ApiError;
use super::extract::{ApiJson, ApiPath};
use crate::domain::{NewUser, User, UserUpdate};
use crate::infrastructure::AppState;

#[utoipa::path(
    get,
    path = "/api/users",
    responses((status = 200, description = "All users", body = [User]))
)]
pub async fn list_users(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = state
        .users
        .find_all()
        .await
        .map_err(|e| ApiError::at(&uri, e))?;
    Ok(Json(users))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, body = User),
        (status = 404, body = crate::api::StandardError)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<User>, ApiError> {
    let user = state
        .users
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::at(&uri, e))?;
    Ok(Json(user))
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = NewUser,
    responses((status = 201, description = "User created", body = User))
)]
pub async fn create_user(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    ApiJson(payload): ApiJson<NewUser>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .users
        .insert(payload)
        .await
        .map_err(|e| ApiError::at(&uri, e))?;

    let location = format!("{}/{}", uri.path().trim_end_matches('/'), user.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(user),
    ))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    request_body = UserUpdate,
    responses(
        (status = 200, body = User),
        (status = 404, body = crate::api::StandardError)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<UserUpdate>,
) -> Result<Json<User>, ApiError> {
    let user = state
        .users
        .update(id, payload)
        .await
        .map_err(|e| ApiError::at(&uri, e))?;
    Ok(Json(user))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "User is referenced by orders", body = crate::api::StandardError),
        (status = 404, body = crate::api::StandardError)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, ApiError> {
    state
        .users
        .delete(id)
        .await
        .map_err(|e| ApiError::at(&uri, e))?;
    Ok(StatusCode::NO_CONTENT)
}
