//! Repository implementations using SeaORM

pub mod category_repository;
pub mod order_item_repository;
pub mod order_repository;
pub mod product_repository;
pub mod user_repository;

pub use category_repository::SeaOrmCategoryRepository;
pub use order_item_repository::SeaOrmOrderItemRepository;
pub use order_repository::SeaOrmOrderRepository;
pub use product_repository::SeaOrmProductRepository;
pub use user_repository::SeaOrmUserRepository;
