//! Feedback Errors

use salvo::http::StatusError;
use tracing::error;

use ordering_app::domain::feedback::FeedbackServiceError;

pub(crate) fn into_status_error(error: FeedbackServiceError) -> StatusError {
    match error {
        FeedbackServiceError::InvalidData => {
            StatusError::bad_request().brief("Stars must be between 1 and 5")
        }
        FeedbackServiceError::MissingRequiredData => {
            StatusError::bad_request().brief("Invalid feedback payload")
        }
        FeedbackServiceError::InvalidReference | FeedbackServiceError::NotFound => {
            StatusError::not_found().brief("Food item not found")
        }
        FeedbackServiceError::AlreadyExists => {
            StatusError::conflict().brief("Feedback already exists")
        }
        FeedbackServiceError::Sql(source) => {
            error!("feedback storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
