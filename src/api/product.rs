use axum::{
    extract::{OriginalUri, State},
    Json,
};

use super::error::ApiError;
use super::extract::ApiPath;
use crate::domain::Product;
use crate::infrastructure::AppState;

#[utoipa::path(
    get,
    path = "/api/products",
    responses((status = 200, body = [Product]))
)]
pub async fn list_products(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state
        .products
        .find_all()
        .await
        .map_err(|e| ApiError::at(&uri, e))?;
    Ok(Json(products))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, body = Product),
        (status = 404, body = crate::api::StandardError)
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Product>, ApiError> {
    let product = state
        .products
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::at(&uri, e))?;
    Ok(Json(product))
}
