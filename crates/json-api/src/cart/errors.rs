//! Cart Errors

use salvo::http::StatusError;
use tracing::error;

use ordering_app::domain::orders::OrdersServiceError;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::NotFound => {
            StatusError::not_found().brief("Cart, food item or promo code not found")
        }
        OrdersServiceError::InvalidPromoCode => {
            StatusError::bad_request().brief("Promo code is not valid today")
        }
        OrdersServiceError::InvalidReference
        | OrdersServiceError::MissingRequiredData
        | OrdersServiceError::InvalidData => StatusError::bad_request().brief("Invalid cart request"),
        OrdersServiceError::Sql(source) => {
            error!("cart storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
