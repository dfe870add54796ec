//! Logout Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    auth::{into_status_error, middleware::bearer_token},
    extensions::*,
    state::State,
};

/// Logout Handler
///
/// Revokes the bearer token used for this request.
#[endpoint(
    tags("sessions"),
    summary = "Logout",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Token revoked"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "sessions.logout", skip_all, err)]
pub(crate) async fn handler(req: &mut Request, depot: &mut Depot) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let token = bearer_token(req).ok_or_else(StatusError::unauthorized)?;

    state
        .app
        .auth
        .logout(token)
        .await
        .map_err(into_status_error)?;

    tracing::info!(
        subject_kind = %principal.kind(),
        subject_uuid = %principal.subject_uuid(),
        "revoked api token"
    );

    Ok(StatusCode::OK)
}
