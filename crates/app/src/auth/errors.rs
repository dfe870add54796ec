//! Auth service errors.

use sqlx::Error;
use thiserror::Error;

use crate::auth::{ApiTokenError, PasswordError};

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("token not found")]
    NotFound,

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("storage error")]
    Sql(#[source] Error),

    #[error("token processing error")]
    Token(#[source] ApiTokenError),

    #[error("password verification failed")]
    Password(#[from] PasswordError),
}

impl From<Error> for AuthServiceError {
    fn from(error: Error) -> Self {
        Self::Sql(error)
    }
}

impl From<ApiTokenError> for AuthServiceError {
    fn from(error: ApiTokenError) -> Self {
        Self::Token(error)
    }
}
