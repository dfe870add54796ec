//! List Orders Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{extensions::*, orders::responses::OrdersResponse, state::State};

/// List Orders Handler
#[endpoint(
    tags("orders"),
    summary = "List All Orders",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Every order, newest first"),
        (status_code = StatusCode::FORBIDDEN, description = "Admins only"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "orders.index",
    skip(depot),
    fields(admin_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<OrdersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let admin = depot.admin_uuid_or_403()?;

    tracing::Span::current().record("admin_uuid", tracing::field::display(admin));

    let orders = state
        .app
        .orders
        .list_orders()
        .await
        .or_500("failed to fetch orders")?;

    Ok(Json(orders.into()))
}
