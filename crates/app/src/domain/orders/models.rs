//! Order Models

use crate::domain::orders::records::{OrderItemRecord, OrderRecord};

/// An order together with its line items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub record: OrderRecord,
    pub items: Vec<OrderItemRecord>,
}

impl Order {
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}

/// A user's cart: nothing yet, or their pending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cart {
    Empty,
    Pending(Order),
}

impl Cart {
    #[must_use]
    pub fn order(&self) -> Option<&Order> {
        match self {
            Self::Empty => None,
            Self::Pending(order) => Some(order),
        }
    }
}
