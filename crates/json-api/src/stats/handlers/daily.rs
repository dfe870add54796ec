//! Daily Stats Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use ordering_app::domain::stats::models::DailyStats;

use crate::{
    extensions::*,
    state::State,
    stats::{BestSellerResponse, errors::into_status_error},
};

/// Daily Stats Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DailyStatsResponse {
    /// `YYYY-MM-DD`
    pub date: String,

    /// Completed orders on the day
    pub orders_count: u64,

    /// Sum of food subtotals in pence/cents
    pub total_income: u64,

    /// Income minus the cost of making each item sold; may be negative
    pub net_income: i64,

    /// Most units sold on the day, if anything sold
    pub plate_of_the_day: Option<BestSellerResponse>,
}

impl From<DailyStats> for DailyStatsResponse {
    fn from(stats: DailyStats) -> Self {
        Self {
            date: stats.date.to_string(),
            orders_count: stats.orders_count,
            total_income: stats.total_income,
            net_income: stats.net_income,
            plate_of_the_day: stats.plate_of_the_day.map(Into::into),
        }
    }
}

/// Daily Stats Handler
#[endpoint(
    tags("stats"),
    summary = "Daily Sales",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Sales for the day"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Admins only"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "stats.daily",
    skip(date, depot),
    fields(date = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    date: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<DailyStatsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.admin_uuid_or_403()?;

    let date = date.into_date_or_today()?;

    tracing::Span::current().record("date", tracing::field::display(date));

    let stats = state
        .app
        .stats
        .daily_stats(date)
        .await
        .map_err(into_status_error)?;

    Ok(Json(stats.into()))
}
