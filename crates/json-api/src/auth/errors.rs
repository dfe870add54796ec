//! Auth Errors

use salvo::http::StatusError;
use tracing::error;

use ordering_app::auth::AuthServiceError;

pub(crate) fn into_status_error(error: AuthServiceError) -> StatusError {
    match error {
        AuthServiceError::NotFound => StatusError::unauthorized().brief("Invalid API token"),
        AuthServiceError::InvalidCredentials => {
            StatusError::unauthorized().brief("Invalid username or password")
        }
        AuthServiceError::Sql(source) => {
            error!("auth storage error: {source}");

            StatusError::internal_server_error()
        }
        AuthServiceError::Token(source) => {
            error!("failed to process api token: {source}");

            StatusError::internal_server_error()
        }
        AuthServiceError::Password(source) => {
            error!("failed to verify password: {source}");

            StatusError::internal_server_error()
        }
    }
}
