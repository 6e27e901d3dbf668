//! Order API handlers. Orders are returned with their items, payment and total.

use axum::{
    extract::{OriginalUri, State},
    Json,
};

use super::error::ApiError;
use super::extract::ApiPath;
use crate::domain::Order;
use crate::infrastructure::AppState;

#[utoipa::path(
    get,
    path = "/api/orders",
    responses((status = 200, body = [Order]))
)]
pub async fn list_orders(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Result<Json<Vec<Order>>, ApiError> {
    let orders = state
        .orders
        .find_all()
        .await
        .map_err(|e| ApiError::at(&uri, e))?;
    Ok(Json(orders))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(("id" = i64, Path, description = "Order id")),
    responses(
        (status = 200, body = Order),
        (status = 404, body = crate::api::StandardError)
    )
)]
pub async fn get_order(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Order>, ApiError> {
    let order = state
        .orders
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::at(&uri, e))?;
    Ok(Json(order))
}
