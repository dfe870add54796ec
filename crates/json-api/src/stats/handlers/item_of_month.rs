//! Item of the Month Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::*,
    state::State,
    stats::{BestSellerResponse, errors::into_status_error},
};

/// Item of the Month Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ItemOfMonthResponse {
    /// `YYYY-MM`
    pub month: String,

    /// Most units sold during the month, if anything sold
    pub item: Option<BestSellerResponse>,
}

/// Item of the Month Handler
#[endpoint(
    tags("stats"),
    summary = "Item of the Month",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Best seller for the month"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Admins only"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "stats.item_of_month",
    skip(month, depot),
    fields(month = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    month: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ItemOfMonthResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.admin_uuid_or_403()?;

    let (year, month) = month.into_year_month()?;
    let label = format!("{year:04}-{month:02}");

    tracing::Span::current().record("month", label.as_str());

    let item = state
        .app
        .stats
        .item_of_month(year, month)
        .await
        .map_err(into_status_error)?;

    Ok(Json(ItemOfMonthResponse {
        month: label,
        item: item.map(Into::into),
    }))
}
