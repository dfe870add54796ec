//! Food Item Errors

use salvo::http::StatusError;
use tracing::error;

use ordering_app::domain::food_items::FoodItemsServiceError;

pub(crate) fn into_status_error(error: FoodItemsServiceError) -> StatusError {
    match error {
        FoodItemsServiceError::AlreadyExists => {
            StatusError::conflict().brief("A food item with this name already exists")
        }
        FoodItemsServiceError::InvalidReference => {
            StatusError::bad_request().brief("Category does not exist")
        }
        FoodItemsServiceError::MissingRequiredData | FoodItemsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid food item payload")
        }
        FoodItemsServiceError::NotFound => StatusError::not_found().brief("Food item not found"),
        FoodItemsServiceError::Sql(source) => {
            error!("food item storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
