//! Auth data models.

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use thiserror::Error;
use uuid::Uuid;

use crate::{
    auth::ApiTokenVersion,
    domain::{admins::records::AdminUuid, users::records::UserUuid},
};

/// Kind of account an API token was issued to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectKind {
    User,
    Admin,
}

impl SubjectKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubjectKind {
    type Err = UnknownSubjectKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            other => Err(UnknownSubjectKind(other.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown subject kind: {0}")]
pub struct UnknownSubjectKind(pub String);

/// The authenticated account behind a bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Principal {
    User(UserUuid),
    Admin(AdminUuid),
}

impl Principal {
    pub(crate) fn from_subject(kind: SubjectKind, subject_uuid: Uuid) -> Self {
        match kind {
            SubjectKind::User => Self::User(UserUuid::from_uuid(subject_uuid)),
            SubjectKind::Admin => Self::Admin(AdminUuid::from_uuid(subject_uuid)),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> SubjectKind {
        match self {
            Self::User(_) => SubjectKind::User,
            Self::Admin(_) => SubjectKind::Admin,
        }
    }

    #[must_use]
    pub fn subject_uuid(&self) -> Uuid {
        match self {
            Self::User(user) => user.into_uuid(),
            Self::Admin(admin) => admin.into_uuid(),
        }
    }
}

/// Stored password hash for a login attempt.
#[derive(Debug, Clone)]
pub(crate) struct Credentials {
    pub uuid: Uuid,
    pub password_hash: String,
}

/// API token data used during bearer authentication.
#[derive(Debug, Clone)]
pub(crate) struct ActiveApiToken {
    pub principal: Principal,

    /// Token format/hash version.
    pub version: ApiTokenVersion,

    /// SHA-256 verifier for the token secret material.
    pub token_hash: String,
}

/// API token metadata persisted in storage.
#[derive(Debug, Clone)]
pub struct ApiTokenMetadata {
    pub uuid: Uuid,
    pub principal: Principal,
    pub version: ApiTokenVersion,
    pub created_at: Timestamp,
    pub expires_at: Option<Timestamp>,
}

/// New API token persistence payload.
#[derive(Debug, Clone)]
pub(crate) struct NewApiToken {
    pub uuid: Uuid,
    pub principal: Principal,
    pub version: ApiTokenVersion,
    pub token_hash: String,
    pub lifetime_hours: i32,
}

/// API token issuance result with one-time raw token.
#[derive(Debug, Clone)]
pub struct IssuedApiToken {
    pub token: String,
    pub metadata: ApiTokenMetadata,
}
