//! User Login Handler

use std::{fmt, sync::Arc};

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ordering_app::auth::{IssuedApiToken, SubjectKind};

use crate::{auth::into_status_error, extensions::*, state::State};

/// Login Request
#[derive(Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"**redacted**")
            .finish()
    }
}

/// Token Response
#[derive(Serialize, Deserialize, ToSchema)]
pub(crate) struct TokenResponse {
    /// Bearer token for the `Authorization` header
    pub token: String,

    /// Always `Bearer`
    pub token_type: String,

    /// The account the token was issued to
    pub subject_uuid: Uuid,

    /// The date and time the token stops being accepted
    pub expires_at: Option<String>,
}

impl fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenResponse")
            .field("token", &"**redacted**")
            .field("subject_uuid", &self.subject_uuid)
            .field("expires_at", &self.expires_at)
            .finish_non_exhaustive()
    }
}

impl From<IssuedApiToken> for TokenResponse {
    fn from(issued: IssuedApiToken) -> Self {
        Self {
            token: issued.token,
            token_type: "Bearer".to_string(),
            subject_uuid: issued.metadata.principal.subject_uuid(),
            expires_at: issued.metadata.expires_at.map(|at| at.to_string()),
        }
    }
}

/// Verify credentials for `kind` and issue a token.
pub(super) async fn issue_token(
    kind: SubjectKind,
    request: LoginRequest,
    depot: &Depot,
) -> Result<Json<TokenResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let issued = state
        .app
        .auth
        .login(kind, &request.username, &request.password)
        .await
        .map_err(into_status_error)?;

    tracing::info!(
        subject_kind = %kind,
        subject_uuid = %issued.metadata.principal.subject_uuid(),
        "issued api token"
    );

    Ok(Json(issued.into()))
}

/// User Login Handler
#[endpoint(
    tags("sessions"),
    summary = "User Login",
    responses(
        (status_code = StatusCode::OK, description = "Token issued"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Invalid username or password"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "sessions.login", skip_all, err)]
pub(crate) async fn handler(
    json: JsonBody<LoginRequest>,
    depot: &mut Depot,
) -> Result<Json<TokenResponse>, StatusError> {
    issue_token(SubjectKind::User, json.into_inner(), depot).await
}
