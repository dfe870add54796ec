//! Promo Code Errors

use salvo::http::StatusError;
use tracing::error;

use ordering_app::domain::promo_codes::PromoCodesServiceError;

pub(crate) fn into_status_error(error: PromoCodesServiceError) -> StatusError {
    match error {
        PromoCodesServiceError::AlreadyExists => {
            StatusError::conflict().brief("A promo code with this code already exists")
        }
        PromoCodesServiceError::NotFound => StatusError::not_found().brief("Promo code not found"),
        PromoCodesServiceError::MissingRequiredData | PromoCodesServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid promo code payload")
        }
        PromoCodesServiceError::Sql(source) => {
            error!("promo code storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
