//! SeaORM implementation of OrderItemRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::{DomainError, OrderItem, OrderItemRepository};
use crate::models::order_item::{ActiveModel, Column, Entity as OrderItemEntity, Model};

pub struct SeaOrmOrderItemRepository {
    db: DatabaseConnection,
}

impl SeaOrmOrderItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<Model> for OrderItem {
    fn from(m: Model) -> Self {
        OrderItem::new(m.order_id, m.product_id, m.quantity, m.price)
    }
}

#[async_trait]
impl OrderItemRepository for SeaOrmOrderItemRepository {
    async fn find_all(&self) -> Result<Vec<OrderItem>, DomainError> {
        let items = OrderItemEntity::find()
            .order_by_asc(Column::OrderId)
            .order_by_asc(Column::ProductId)
            .all(&self.db)
            .await?;

        Ok(items.into_iter().map(OrderItem::from).collect())
    }

    async fn find_by_id(
        &self,
        order_id: i64,
        product_id: i64,
    ) -> Result<Option<OrderItem>, DomainError> {
        let item = OrderItemEntity::find_by_id((order_id, product_id))
            .one(&self.db)
            .await?;
        Ok(item.map(OrderItem::from))
    }

    async fn find_by_order(&self, order_id: i64) -> Result<Vec<OrderItem>, DomainError> {
        let items = OrderItemEntity::find()
            .filter(Column::OrderId.eq(order_id))
            .order_by_asc(Column::ProductId)
            .all(&self.db)
            .await?;

        Ok(items.into_iter().map(OrderItem::from).collect())
    }

    async fn save(&self, item: OrderItem) -> Result<OrderItem, DomainError> {
        let model = ActiveModel {
            order_id: Set(item.order_id),
            product_id: Set(item.product_id),
            quantity: Set(item.quantity),
            price: Set(item.price),
        };

        let result = model.insert(&self.db).await?;
        Ok(OrderItem::from(result))
    }
}
