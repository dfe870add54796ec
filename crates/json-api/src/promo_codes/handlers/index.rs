//! List Promo Codes Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use ordering_app::domain::promo_codes::records::PromoCodeRecord;

use crate::{extensions::*, state::State};

/// Promo Code Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PromoCodeResponse {
    pub code: String,

    /// Percentage taken off the food subtotal
    pub discount: u8,

    /// First day the code can be applied (`YYYY-MM-DD`)
    pub valid_from: String,

    /// Last day the code can be applied (`YYYY-MM-DD`)
    pub valid_to: String,

    pub created_at: String,
}

impl From<PromoCodeRecord> for PromoCodeResponse {
    fn from(record: PromoCodeRecord) -> Self {
        Self {
            code: record.code,
            discount: record.discount,
            valid_from: record.valid_from.to_string(),
            valid_to: record.valid_to.to_string(),
            created_at: record.created_at.to_string(),
        }
    }
}

/// Promo Codes Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PromoCodesResponse {
    pub promo_codes: Vec<PromoCodeResponse>,
}

/// List Promo Codes Handler
#[endpoint(
    tags("promo-codes"),
    summary = "List Promo Codes",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Promo codes"),
        (status_code = StatusCode::FORBIDDEN, description = "Admins only"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "promo_codes.index", skip(depot), err)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<PromoCodesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.admin_uuid_or_403()?;

    let promo_codes = state
        .app
        .promo_codes
        .list_promo_codes()
        .await
        .or_500("failed to fetch promo codes")?;

    Ok(Json(PromoCodesResponse {
        promo_codes: promo_codes.into_iter().map(Into::into).collect(),
    }))
}
