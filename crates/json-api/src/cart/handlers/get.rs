//! Get Cart Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{cart::errors::into_status_error, extensions::*, orders::responses::CartResponse, state::State};

/// Get Cart Handler
///
/// Returns the caller's pending order, or an empty cart.
#[endpoint(
    tags("cart"),
    summary = "Get Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart"),
        (status_code = StatusCode::FORBIDDEN, description = "Users only"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "cart.get",
    skip(depot),
    fields(user_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_403()?;

    tracing::Span::current().record("user_uuid", tracing::field::display(user));

    let cart = state
        .app
        .orders
        .get_cart(user)
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}
