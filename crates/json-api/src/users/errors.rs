//! User Errors

use salvo::http::StatusError;
use tracing::error;

use ordering_app::domain::users::UsersServiceError;

pub(crate) fn into_status_error(error: UsersServiceError) -> StatusError {
    match error {
        UsersServiceError::AlreadyExists => {
            StatusError::conflict().brief("Username is already taken")
        }
        UsersServiceError::MissingRequiredData | UsersServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid user payload")
        }
        UsersServiceError::NotFound => StatusError::not_found().brief("User not found"),
        UsersServiceError::Sql(source) => {
            error!("failed to persist user: {source}");

            StatusError::internal_server_error()
        }
        UsersServiceError::Password(source) => {
            error!("failed to hash password: {source}");

            StatusError::internal_server_error()
        }
    }
}
