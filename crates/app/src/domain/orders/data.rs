//! Order Data

use std::fmt;

use crate::domain::{food_items::records::FoodItemUuid, orders::records::PaymentUuid};

/// Units of a food item to add to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewCartItem {
    pub food_item_uuid: FoodItemUuid,
    pub quantity: u32,
}

/// Checkout request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Checkout {
    pub payment: Option<NewPayment>,
}

/// Payment captured at checkout.
#[derive(Clone, PartialEq, Eq)]
pub struct NewPayment {
    pub uuid: PaymentUuid,
    pub payment_method: String,
    pub transaction_id: String,
}

impl fmt::Debug for NewPayment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewPayment")
            .field("uuid", &self.uuid)
            .field("payment_method", &self.payment_method)
            .field("transaction_id", &"**redacted**")
            .finish()
    }
}
