//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{DomainError, OrderStatus};

/// User data for API responses
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Argon2 PHC string, never sent over the wire
    #[serde(skip_serializing)]
    pub password: String,
}

/// Input for creating a user
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

impl NewUser {
    pub fn new(name: &str, email: &str, phone: &str, password: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            password: password.to_string(),
        }
    }
}

/// Input for updating a user
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Repository trait for User entity
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find all users, ordered by id
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    /// Find a user by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Persist a new user; the password must already be hashed
    async fn insert(&self, user: NewUser) -> Result<User, DomainError>;

    /// Overwrite the contact fields of a user
    async fn update(&self, id: i64, changes: UserUpdate) -> Result<User, DomainError>;

    /// Delete a user by ID
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Repository trait for Category entity
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Category>, DomainError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, DomainError>;
}

/// Product data with its categories
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub img_url: String,
    pub categories: Vec<Category>,
}

/// Repository trait for Product entity
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find all products with their categories
    async fn find_all(&self) -> Result<Vec<Product>, DomainError>;

    /// Find a product by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, DomainError>;
}

/// Line of an order, keyed by (order_id, product_id)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct OrderItem {
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    /// Unit price captured when the order was placed
    pub price: f64,
    pub sub_total: f64,
}

impl OrderItem {
    pub fn new(order_id: i64, product_id: i64, quantity: i32, price: f64) -> Self {
        Self {
            order_id,
            product_id,
            quantity,
            price,
            sub_total: price * f64::from(quantity),
        }
    }
}

/// Repository trait for OrderItem entity
#[async_trait]
pub trait OrderItemRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<OrderItem>, DomainError>;

    async fn find_by_id(
        &self,
        order_id: i64,
        product_id: i64,
    ) -> Result<Option<OrderItem>, DomainError>;

    /// Items of one order, ordered by product id
    async fn find_by_order(&self, order_id: i64) -> Result<Vec<OrderItem>, DomainError>;

    async fn save(&self, item: OrderItem) -> Result<OrderItem, DomainError>;
}

/// Payment of an order; shares the order's id
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Payment {
    pub id: i64,
    pub moment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Order {
    pub id: i64,
    pub moment: String,
    pub order_status: OrderStatus,
    pub client_id: i64,
    pub items: Vec<OrderItem>,
    pub payment: Option<Payment>,
    pub total: f64,
}

impl Order {
    /// Attach the order's items and recompute the total
    pub fn with_items(mut self, items: Vec<OrderItem>) -> Self {
        self.total = items.iter().map(|i| i.sub_total).sum();
        self.items = items;
        self
    }
}

/// Repository trait for Order entity
///
/// Returned orders carry their payment but no items; items are loaded
/// through [`OrderItemRepository`].
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Order>, DomainError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, DomainError>;
}
