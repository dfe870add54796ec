//! Apply Promo Code Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    cart::errors::into_status_error, extensions::*, orders::responses::OrderResponse,
    state::State,
};

/// Apply Promo Code Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ApplyPromoCodeRequest {
    pub code: String,
}

/// Apply Promo Code Handler
///
/// Attaches a promo code to the caller's pending order. The code must be valid today.
#[endpoint(
    tags("cart"),
    summary = "Apply Promo Code",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Promo code applied"),
        (status_code = StatusCode::NOT_FOUND, description = "No pending order or unknown code"),
        (status_code = StatusCode::BAD_REQUEST, description = "Code is not valid today"),
        (status_code = StatusCode::FORBIDDEN, description = "Users only"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "cart.apply_promo_code",
    skip_all,
    fields(user_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<ApplyPromoCodeRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_403()?;

    tracing::Span::current().record("user_uuid", tracing::field::display(user));

    let order = state
        .app
        .orders
        .apply_promo_code(user, json.into_inner().code, today())
        .await
        .map_err(into_status_error)?;

    Ok(Json(order.into()))
}
