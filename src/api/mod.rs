pub mod category;
pub mod error;
pub mod extract;
pub mod health;
pub mod order;
pub mod product;
pub mod user;

use axum::{routing::get, Router};

use crate::infrastructure::AppState;

pub use error::{ApiError, StandardError};
pub use extract::{ApiJson, ApiPath};

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Users
        .route("/users", get(user::list_users).post(user::create_user))
        .route(
            "/users/:id",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        // Catalogue
        .route("/products", get(product::list_products))
        .route("/products/:id", get(product::get_product))
        .route("/categories", get(category::list_categories))
        .route("/categories/:id", get(category::get_category))
        // Orders
        .route("/orders", get(order::list_orders))
        .route("/orders/:id", get(order::get_order))
        .with_state(state)
}
