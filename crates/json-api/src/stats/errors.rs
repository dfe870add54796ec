//! Stats Errors

use salvo::http::StatusError;
use tracing::error;

use ordering_app::domain::stats::StatsServiceError;

pub(crate) fn into_status_error(error: StatsServiceError) -> StatusError {
    match error {
        StatsServiceError::InvalidData => StatusError::bad_request().brief("Invalid date range"),
        StatsServiceError::Sql(source) => {
            error!("stats storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
