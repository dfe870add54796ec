//! Create Promo Code Handler

use std::sync::Arc;

use jiff::civil::Date;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use ordering_app::domain::promo_codes::data::NewPromoCode;

use crate::{
    extensions::*,
    promo_codes::{errors::into_status_error, index::PromoCodeResponse},
    state::State,
};

/// Create Promo Code Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreatePromoCodeRequest {
    pub code: String,

    /// Percentage from 1 to 100
    pub discount: u8,

    /// `YYYY-MM-DD`
    pub valid_from: String,

    /// `YYYY-MM-DD`, inclusive
    pub valid_to: String,
}

impl CreatePromoCodeRequest {
    fn into_new_promo_code(self) -> Result<NewPromoCode, StatusError> {
        let valid_from = self
            .valid_from
            .parse::<Date>()
            .or_400("\"valid_from\" must be formatted as YYYY-MM-DD")?;

        let valid_to = self
            .valid_to
            .parse::<Date>()
            .or_400("\"valid_to\" must be formatted as YYYY-MM-DD")?;

        Ok(NewPromoCode {
            code: self.code,
            discount: self.discount,
            valid_from,
            valid_to,
        })
    }
}

/// Create Promo Code Handler
#[endpoint(
    tags("promo-codes"),
    summary = "Create Promo Code",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Promo code created"),
        (status_code = StatusCode::CONFLICT, description = "Code already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Admins only"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "promo_codes.create",
    skip_all,
    fields(admin_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreatePromoCodeRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<PromoCodeResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let admin = depot.admin_uuid_or_403()?;

    tracing::Span::current().record("admin_uuid", tracing::field::display(admin));

    let promo_code = state
        .app
        .promo_codes
        .create_promo_code(json.into_inner().into_new_promo_code()?)
        .await
        .map_err(into_status_error)?;

    tracing::info!(code = %promo_code.code, discount = promo_code.discount, "created promo code");

    res.status_code(StatusCode::CREATED);

    Ok(Json(promo_code.into()))
}
