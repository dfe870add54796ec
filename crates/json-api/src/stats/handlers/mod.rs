//! Stats Handlers

pub(crate) mod best_sellers;
pub(crate) mod daily;
pub(crate) mod item_of_month;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ordering_app::domain::stats::models::BestSeller;

/// Best Seller Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BestSellerResponse {
    pub food_item_uuid: Uuid,
    pub name: String,

    /// Units sold across completed orders
    pub quantity_sold: u64,
}

impl From<BestSeller> for BestSellerResponse {
    fn from(best_seller: BestSeller) -> Self {
        Self {
            food_item_uuid: best_seller.food_item_uuid.into_uuid(),
            name: best_seller.name,
            quantity_sold: best_seller.quantity_sold,
        }
    }
}
