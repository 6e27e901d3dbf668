//! Domain layer - Pure business abstractions
//!
//! Entity data types, repository trait definitions and the domain error type.

pub mod errors;
pub mod order_status;
pub mod repositories;

pub use errors::DomainError;
pub use order_status::OrderStatus;
pub use repositories::*;
