//! Order Service - assembles orders from the order and order item repositories

use std::sync::Arc;

use tracing::debug;

use crate::domain::{DomainError, Order, OrderItemRepository, OrderRepository};

#[derive(Clone)]
pub struct OrderService {
    orders: Arc<dyn OrderRepository>,
    items: Arc<dyn OrderItemRepository>,
}

impl OrderService {
    pub fn new(orders: Arc<dyn OrderRepository>, items: Arc<dyn OrderItemRepository>) -> Self {
        Self { orders, items }
    }

    pub async fn find_all(&self) -> Result<Vec<Order>, DomainError> {
        let headers = self.orders.find_all().await?;

        let mut orders = Vec::with_capacity(headers.len());
        for order in headers {
            let items = self.items.find_by_order(order.id).await?;
            orders.push(order.with_items(items));
        }
        Ok(orders)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Order, DomainError> {
        debug!(order_id = id, "Getting order by id");
        let order = self
            .orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(id))?;

        let items = self.items.find_by_order(id).await?;
        Ok(order.with_items(items))
    }
}
