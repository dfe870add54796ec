//! Order and cart response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ordering_app::domain::orders::{
    models::{Cart, Order},
    records::OrderItemRecord,
};

/// Order Line Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderItemResponse {
    pub food_item_uuid: Uuid,

    /// Food item name
    pub name: String,

    /// Current unit price in pence/cents
    pub unit_price: u64,

    pub quantity: u32,

    /// `unit_price × quantity`
    pub line_total: u64,
}

impl From<OrderItemRecord> for OrderItemResponse {
    fn from(item: OrderItemRecord) -> Self {
        Self {
            line_total: item.line_total(),
            food_item_uuid: item.food_item_uuid.into_uuid(),
            name: item.name,
            unit_price: item.unit_price,
            quantity: item.quantity,
        }
    }
}

/// Order Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    /// The unique identifier of the order
    pub uuid: Uuid,

    pub user_uuid: Uuid,

    /// `pending` while the order is a cart, `completed` after checkout
    pub status: String,

    /// The calendar date the order counts towards
    pub order_date: String,

    pub items: Vec<OrderItemResponse>,

    /// Total number of units across all line items
    pub item_count: u64,

    /// Food subtotal in pence/cents
    pub subtotal: u64,

    pub delivery_fee: u64,

    pub promo_code: Option<String>,

    /// Promo code discount in pence/cents
    pub discount: u64,

    /// `subtotal - discount + delivery_fee`
    pub grand_total: u64,

    pub payment_uuid: Option<Uuid>,

    /// The date and time the order was opened
    pub created_at: String,

    /// The date and time the order last changed
    pub updated_at: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        let item_count = order.item_count();
        let discount = order.record.discount();
        let grand_total = order.record.grand_total();
        let record = order.record;

        Self {
            uuid: record.uuid.into_uuid(),
            user_uuid: record.user_uuid.into_uuid(),
            status: record.status.to_string(),
            order_date: record.order_date.to_string(),
            items: order.items.into_iter().map(Into::into).collect(),
            item_count,
            subtotal: record.subtotal,
            delivery_fee: record.delivery_fee,
            promo_code: record.promo_code,
            discount,
            grand_total,
            payment_uuid: record.payment_uuid.map(|uuid| uuid.into_uuid()),
            created_at: record.created_at.to_string(),
            updated_at: record.updated_at.to_string(),
        }
    }
}

/// Orders Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrdersResponse {
    /// Orders, newest first
    pub orders: Vec<OrderResponse>,
}

impl From<Vec<Order>> for OrdersResponse {
    fn from(orders: Vec<Order>) -> Self {
        Self {
            orders: orders.into_iter().map(Into::into).collect(),
        }
    }
}

/// Cart Response
///
/// `order` is absent when the user has nothing in their cart.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    pub order: Option<OrderResponse>,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        match cart {
            Cart::Empty => Self { order: None },
            Cart::Pending(order) => order.into(),
        }
    }
}

impl From<Order> for CartResponse {
    fn from(order: Order) -> Self {
        Self {
            order: Some(order.into()),
        }
    }
}
