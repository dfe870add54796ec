//! Order History Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{extensions::*, orders::responses::OrdersResponse, state::State};

/// Order History Handler
///
/// Lists the calling user's orders, including the cart if one is open.
#[endpoint(
    tags("orders"),
    summary = "List My Orders",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Order history"),
        (status_code = StatusCode::FORBIDDEN, description = "Users only"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "orders.history",
    skip(depot),
    fields(user_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<OrdersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_403()?;

    tracing::Span::current().record("user_uuid", tracing::field::display(user));

    let orders = state
        .app
        .orders
        .list_user_orders(user)
        .await
        .or_500("failed to fetch order history")?;

    Ok(Json(orders.into()))
}
