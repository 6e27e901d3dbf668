use axum::{
    extract::{OriginalUri, State},
    Json,
};

use super::error::ApiError;
use super::extract::ApiPath;
use crate::domain::Category;
use crate::infrastructure::AppState;

#[utoipa::path(
    get,
    path = "/api/categories",
    responses((status = 200, body = [Category]))
)]
pub async fn list_categories(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Result<Json<Vec<Category>>, ApiError> {
    let categories = state
        .categories
        .find_all()
        .await
        .map_err(|e| ApiError::at(&uri, e))?;
    Ok(Json(categories))
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, body = Category),
        (status = 404, body = crate::api::StandardError)
    )
)]
pub async fn get_category(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Category>, ApiError> {
    let category = state
        .categories
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::at(&uri, e))?;
    Ok(Json(category))
}
