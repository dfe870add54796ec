//! Remove Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{PathParam, QueryParam},
    prelude::*,
};
use uuid::Uuid;

use crate::{
    cart::errors::into_status_error, extensions::*, orders::responses::CartResponse,
    state::State,
};

/// Remove Cart Item Handler
///
/// Removes `quantity` units (default 1) of a food item from the caller's cart. Removing
/// more units than the cart holds drops the whole line; the cart is discarded once empty.
#[endpoint(
    tags("cart"),
    summary = "Remove Item from Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Item removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Item is not in the cart"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Users only"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "cart.items.delete",
    skip(food_item, quantity, depot),
    fields(
        user_uuid = tracing::field::Empty,
        food_item_uuid = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    food_item: PathParam<Uuid>,
    quantity: QueryParam<u32, false>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_403()?;
    let food_item = food_item.into_inner();

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(user));
    span.record("food_item_uuid", tracing::field::display(food_item));

    let cart = state
        .app
        .orders
        .remove_item(user, food_item.into(), quantity.into_inner().unwrap_or(1))
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}
