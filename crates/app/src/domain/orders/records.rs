//! Order Records

use std::{fmt, str::FromStr};

use jiff::{Timestamp, civil::Date};
use thiserror::Error;

use crate::{
    domain::{food_items::records::FoodItemUuid, users::records::UserUuid},
    uuids::TypedUuid,
};

/// Order UUID
pub type OrderUuid = TypedUuid<OrderRecord>;

/// Payment UUID
pub type PaymentUuid = TypedUuid<PaymentRecord>;

/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Completed,
}

impl OrderStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown order status: {0}")]
pub struct UnknownOrderStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownOrderStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            other => Err(UnknownOrderStatus(other.to_string())),
        }
    }
}

/// Order Record
///
/// `subtotal` accumulates `unit_price × quantity` for every line item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRecord {
    pub uuid: OrderUuid,
    pub user_uuid: UserUuid,
    pub status: OrderStatus,
    pub order_date: Date,
    pub subtotal: u64,
    pub delivery_fee: u64,
    pub promo_code: Option<String>,

    /// Percentage discount of the applied promo code.
    pub promo_discount: Option<u8>,

    pub payment_uuid: Option<PaymentUuid>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl OrderRecord {
    /// Discount granted by the applied promo code, rounded down.
    #[must_use]
    pub fn discount(&self) -> u64 {
        let Some(percent) = self.promo_discount else {
            return 0;
        };

        let discount = u128::from(self.subtotal) * u128::from(percent.min(100)) / 100;

        u64::try_from(discount).unwrap_or(self.subtotal)
    }

    #[must_use]
    pub fn grand_total(&self) -> u64 {
        self.subtotal
            .saturating_sub(self.discount())
            .saturating_add(self.delivery_fee)
    }
}

/// Order line item, expanded with the food item's name and unit price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItemRecord {
    pub order_uuid: OrderUuid,
    pub food_item_uuid: FoodItemUuid,
    pub name: String,
    pub unit_price: u64,
    pub quantity: u32,
}

impl OrderItemRecord {
    #[must_use]
    pub fn line_total(&self) -> u64 {
        self.unit_price.saturating_mul(u64::from(self.quantity))
    }
}

/// Payment Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRecord {
    pub uuid: PaymentUuid,
    pub payment_method: String,
    pub payment_status: String,
    pub transaction_id: String,
    pub created_at: Timestamp,
}
