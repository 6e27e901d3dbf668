//! SeaORM implementation of OrderRepository

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::domain::{DomainError, Order, OrderRepository, OrderStatus, Payment};
use crate::models::order::{Column, Entity as OrderEntity, Model};
use crate::models::payment::{self, Entity as PaymentEntity};

/// SeaORM-based implementation of OrderRepository
pub struct SeaOrmOrderRepository {
    db: DatabaseConnection,
}

impl SeaOrmOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_order(model: Model, payment: Option<payment::Model>) -> Result<Order, DomainError> {
    // An unknown stored code is a corrupt row, not bad client input
    let order_status = OrderStatus::from_code(model.order_status).map_err(|_| {
        DomainError::Database(format!(
            "Corrupt order_status code {} on order {}",
            model.order_status, model.id
        ))
    })?;
    Ok(Order {
        id: model.id,
        moment: model.moment,
        order_status,
        client_id: model.client_id,
        items: Vec::new(),
        payment: payment.map(|p| Payment {
            id: p.id,
            moment: p.moment,
        }),
        total: 0.0,
    })
}

#[async_trait]
impl OrderRepository for SeaOrmOrderRepository {
    async fn find_all(&self) -> Result<Vec<Order>, DomainError> {
        let rows = OrderEntity::find()
            .find_also_related(PaymentEntity)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        rows.into_iter()
            .map(|(order, payment)| to_order(order, payment))
            .collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, DomainError> {
        let row = OrderEntity::find_by_id(id)
            .find_also_related(PaymentEntity)
            .one(&self.db)
            .await?;

        row.map(|(order, payment)| to_order(order, payment))
            .transpose()
    }
}
