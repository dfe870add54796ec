//! Admin Login Handler

use salvo::{oapi::extract::JsonBody, prelude::*};

use ordering_app::auth::SubjectKind;

use super::login::{LoginRequest, TokenResponse, issue_token};

/// Admin Login Handler
///
/// Admin credentials are checked against the admins table only.
#[endpoint(
    tags("sessions"),
    summary = "Admin Login",
    responses(
        (status_code = StatusCode::OK, description = "Token issued"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Invalid username or password"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "sessions.admin_login", skip_all, err)]
pub(crate) async fn handler(
    json: JsonBody<LoginRequest>,
    depot: &mut Depot,
) -> Result<Json<TokenResponse>, StatusError> {
    issue_token(SubjectKind::Admin, json.into_inner(), depot).await
}
