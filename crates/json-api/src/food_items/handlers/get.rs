//! Get Food Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ordering_app::domain::food_items::records::FoodItemRecord;

use crate::{extensions::*, food_items::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct FoodItemResponse {
    /// The unique identifier of the food item
    pub uuid: Uuid,

    /// The category the item is listed under
    pub category_uuid: Uuid,

    pub name: String,

    pub description: Option<String>,

    /// The unit price in pence/cents
    pub price: u64,

    /// Path or URL of the item's photo
    pub photo: Option<String>,

    /// The date and time the food item was created
    pub created_at: String,
}

impl From<FoodItemRecord> for FoodItemResponse {
    fn from(item: FoodItemRecord) -> Self {
        Self {
            uuid: item.uuid.into_uuid(),
            category_uuid: item.category_uuid.into_uuid(),
            name: item.name,
            description: item.description,
            price: item.price,
            photo: item.photo,
            created_at: item.created_at.to_string(),
        }
    }
}

/// Get Food Item Handler
///
/// Returns a food item that is still on the menu.
#[endpoint(
    tags("food-items"),
    summary = "Get Food Item",
    responses(
        (status_code = StatusCode::OK, description = "Food item"),
        (status_code = StatusCode::NOT_FOUND, description = "Food item not found"),
    ),
)]
pub(crate) async fn handler(
    food_item: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<FoodItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let item = state
        .app
        .food_items
        .get_food_item(food_item.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(item.into()))
}
