//! Add Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ordering_app::domain::orders::data::NewCartItem;

use crate::{
    cart::errors::into_status_error, extensions::*, orders::responses::OrderResponse,
    state::State,
};

const fn default_quantity() -> u32 {
    1
}

/// Add Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddCartItemRequest {
    pub food_item_uuid: Uuid,

    /// Units to add, defaults to 1
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

impl From<AddCartItemRequest> for NewCartItem {
    fn from(request: AddCartItemRequest) -> Self {
        NewCartItem {
            food_item_uuid: request.food_item_uuid.into(),
            quantity: request.quantity,
        }
    }
}

/// Add Cart Item Handler
///
/// Adds units of a food item to the caller's cart, opening a new pending order when
/// there is none. Adding an item already in the cart increases its quantity.
#[endpoint(
    tags("cart"),
    summary = "Add Item to Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Item added"),
        (status_code = StatusCode::NOT_FOUND, description = "Food item not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Users only"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "cart.items.create",
    skip_all,
    fields(
        user_uuid = tracing::field::Empty,
        food_item_uuid = tracing::field::Empty,
        quantity = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<AddCartItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_403()?;
    let request = json.into_inner();

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(user));
    span.record("food_item_uuid", tracing::field::display(request.food_item_uuid));
    span.record("quantity", request.quantity);

    let order = state
        .app
        .orders
        .add_item(user, request.into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(order.into()))
}
