//! Stats Models

use jiff::civil::Date;

use crate::domain::food_items::records::FoodItemUuid;

/// Units of one food item sold across completed orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestSeller {
    pub food_item_uuid: FoodItemUuid,
    pub name: String,
    pub quantity_sold: u64,
}

/// Sales figures for a single day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyStats {
    pub date: Date,
    pub orders_count: u64,

    /// Sum of completed order subtotals.
    pub total_income: u64,

    /// Sum of `quantity × (price − price_to_make)`; negative when sold below cost.
    pub net_income: i64,

    pub plate_of_the_day: Option<BestSeller>,
}
