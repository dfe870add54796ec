//! Food Item Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{extensions::*, food_items::get::FoodItemResponse, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct FoodItemsResponse {
    /// Food items currently on the menu
    pub food_items: Vec<FoodItemResponse>,
}

/// Food Item Index Handler
///
/// Returns the menu, optionally restricted to one category.
#[endpoint(tags("food-items"), summary = "List Food Items")]
pub(crate) async fn handler(
    category: QueryParam<Uuid, false>,
    depot: &mut Depot,
) -> Result<Json<FoodItemsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let items = state
        .app
        .food_items
        .list_food_items(category.into_inner().map(Into::into))
        .await
        .or_500("failed to fetch food items")?;

    Ok(Json(FoodItemsResponse {
        food_items: items.into_iter().map(Into::into).collect(),
    }))
}
