//! Application state containing services and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{
    CategoryRepository, OrderItemRepository, OrderRepository, ProductRepository, UserRepository,
};
use crate::infrastructure::{
    SeaOrmCategoryRepository, SeaOrmOrderItemRepository, SeaOrmOrderRepository,
    SeaOrmProductRepository, SeaOrmUserRepository,
};
use crate::services::{CategoryService, OrderService, ProductService, UserService};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    pub users: UserService,
    pub products: ProductService,
    pub categories: CategoryService,
    pub orders: OrderService,
}

impl AppState {
    /// Wire every repository to its SeaORM implementation and build the services
    pub fn new(db: DatabaseConnection) -> Self {
        let user_repo: Arc<dyn UserRepository> = Arc::new(SeaOrmUserRepository::new(db.clone()));
        let product_repo: Arc<dyn ProductRepository> =
            Arc::new(SeaOrmProductRepository::new(db.clone()));
        let category_repo: Arc<dyn CategoryRepository> =
            Arc::new(SeaOrmCategoryRepository::new(db.clone()));
        let order_repo: Arc<dyn OrderRepository> =
            Arc::new(SeaOrmOrderRepository::new(db.clone()));
        let order_item_repo: Arc<dyn OrderItemRepository> =
            Arc::new(SeaOrmOrderItemRepository::new(db.clone()));

        Self {
            db,
            users: UserService::new(user_repo),
            products: ProductService::new(product_repo),
            categories: CategoryService::new(category_repo),
            orders: OrderService::new(order_repo, order_item_repo),
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
