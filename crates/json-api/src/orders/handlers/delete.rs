//! Delete Order Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, orders::errors::into_status_error, state::State};

/// Delete Order Handler
///
/// Removes the order and its line items. Deleted orders drop out of every statistic.
#[endpoint(
    tags("orders"),
    summary = "Delete Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Order deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Admins only"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "orders.delete",
    skip(order, depot),
    fields(
        admin_uuid = tracing::field::Empty,
        order_uuid = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let admin = depot.admin_uuid_or_403()?;
    let order = order.into_inner();

    let span = tracing::Span::current();

    span.record("admin_uuid", tracing::field::display(admin));
    span.record("order_uuid", tracing::field::display(order));

    state
        .app
        .orders
        .delete_order(order.into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(order_uuid = %order, "deleted order");

    Ok(StatusCode::OK)
}
