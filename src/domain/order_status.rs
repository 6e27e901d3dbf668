//! Lifecycle status of an order, persisted as an integer code

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    WaitingPayment,
    Paid,
    Shipped,
    Delivered,
    Canceled,
}

impl OrderStatus {
    /// Storage code of this status
    pub fn code(self) -> i32 {
        match self {
            OrderStatus::WaitingPayment => 1,
            OrderStatus::Paid => 2,
            OrderStatus::Shipped => 3,
            OrderStatus::Delivered => 4,
            OrderStatus::Canceled => 5,
        }
    }

    pub fn from_code(code: i32) -> Result<Self, DomainError> {
        match code {
            1 => Ok(OrderStatus::WaitingPayment),
            2 => Ok(OrderStatus::Paid),
            3 => Ok(OrderStatus::Shipped),
            4 => Ok(OrderStatus::Delivered),
            5 => Ok(OrderStatus::Canceled),
            _ => Err(DomainError::validation("Invalid OrderStatus code")),
        }
    }
}
