//! Food Item Data

use crate::domain::{categories::records::CategoryUuid, food_items::records::FoodItemUuid};

/// New Food Item Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFoodItem {
    pub uuid: FoodItemUuid,
    pub category_uuid: CategoryUuid,
    pub name: String,
    pub description: Option<String>,
    pub price: u64,
    pub price_to_make: u64,
    pub photo: Option<String>,
}
