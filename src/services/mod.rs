//! Services Layer
//!
//! Thin services between callers (HTTP handlers, seeding) and repositories.
//! Each service is composed explicitly from the repositories it needs.

pub mod category_service;
pub mod order_service;
pub mod product_service;
pub mod user_service;

pub use category_service::CategoryService;
pub use order_service::OrderService;
pub use product_service::ProductService;
pub use user_service::UserService;
