//! Register User Handler

use std::{fmt, sync::Arc};

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ordering_app::domain::users::{
    data::NewUser,
    records::{UserRecord, UserUuid},
};

use crate::{extensions::*, state::State, users::errors::into_status_error};

/// Register User Request
#[derive(Serialize, Deserialize, ToSchema)]
pub(crate) struct RegisterUserRequest {
    pub username: String,
    pub password: String,
    pub phone_number: String,
    pub address: String,
}

impl fmt::Debug for RegisterUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterUserRequest")
            .field("username", &self.username)
            .field("password", &"**redacted**")
            .finish_non_exhaustive()
    }
}

impl From<RegisterUserRequest> for NewUser {
    fn from(request: RegisterUserRequest) -> Self {
        NewUser {
            uuid: UserUuid::new(),
            username: request.username,
            password: request.password,
            phone_number: request.phone_number,
            address: request.address,
        }
    }
}

/// User Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserResponse {
    /// The unique identifier of the user
    pub uuid: Uuid,

    pub username: String,

    pub phone_number: String,

    /// Delivery address
    pub address: String,

    /// The date and time the user registered
    pub created_at: String,
}

impl From<UserRecord> for UserResponse {
    fn from(user: UserRecord) -> Self {
        Self {
            uuid: user.uuid.into_uuid(),
            username: user.username,
            phone_number: user.phone_number,
            address: user.address,
            created_at: user.created_at.to_string(),
        }
    }
}

/// Register User Handler
#[endpoint(
    tags("users"),
    summary = "Register User",
    responses(
        (status_code = StatusCode::CREATED, description = "User registered"),
        (status_code = StatusCode::CONFLICT, description = "Username is already taken"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "users.create", skip_all, fields(user_uuid = tracing::field::Empty), err)]
pub(crate) async fn handler(
    json: JsonBody<RegisterUserRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<UserResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let user = state
        .app
        .users
        .register_user(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    tracing::Span::current().record("user_uuid", tracing::field::display(user.uuid));
    tracing::info!(user_uuid = %user.uuid, "registered user");

    res.status_code(StatusCode::CREATED);

    Ok(Json(user.into()))
}
