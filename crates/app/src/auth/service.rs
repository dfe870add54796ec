//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::info;

use crate::auth::{
    AuthServiceError, BearerToken, IssuedApiToken, Principal, SubjectKind,
    UNKNOWN_ACCOUNT_PASSWORD_HASH, models::NewApiToken, repository::PgAuthRepository,
    verify_password,
};

/// Hours an issued token stays valid.
pub const API_TOKEN_LIFETIME_HOURS: i32 = 24;

#[derive(Debug, Clone)]
pub struct PgAuthService {
    repository: PgAuthRepository,
}

impl PgAuthService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgAuthRepository::new(pool),
        }
    }

    async fn issue_api_token(
        &self,
        principal: Principal,
    ) -> Result<IssuedApiToken, AuthServiceError> {
        let token = BearerToken::generate();

        let metadata = self
            .repository
            .create_api_token(&NewApiToken {
                uuid: token.token_uuid,
                principal,
                version: token.version,
                token_hash: token.verifier(&principal.subject_uuid()),
                lifetime_hours: API_TOKEN_LIFETIME_HOURS,
            })
            .await?;

        Ok(IssuedApiToken {
            token: token.to_string(),
            metadata,
        })
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn login(
        &self,
        kind: SubjectKind,
        username: &str,
        password: &str,
    ) -> Result<IssuedApiToken, AuthServiceError> {
        let Some(credentials) = self
            .repository
            .find_credentials(kind, username.trim())
            .await?
        else {
            verify_password(password, UNKNOWN_ACCOUNT_PASSWORD_HASH).await?;

            return Err(AuthServiceError::InvalidCredentials);
        };

        if !verify_password(password, &credentials.password_hash).await? {
            return Err(AuthServiceError::InvalidCredentials);
        }

        let issued = self
            .issue_api_token(Principal::from_subject(kind, credentials.uuid))
            .await?;

        info!(subject = %kind, token = %issued.metadata.uuid, "issued api token");

        Ok(issued)
    }

    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Principal, AuthServiceError> {
        let presented: BearerToken = bearer_token
            .parse()
            .map_err(|_| AuthServiceError::NotFound)?;

        let stored = self
            .repository
            .find_active_api_token(presented.token_uuid, presented.version)
            .await?
            .ok_or(AuthServiceError::NotFound)?;

        if stored.version != presented.version {
            return Err(AuthServiceError::NotFound);
        }

        let expected = presented.verifier(&stored.principal.subject_uuid());

        if !constant_time_eq(expected.as_bytes(), stored.token_hash.as_bytes()) {
            return Err(AuthServiceError::NotFound);
        }

        Ok(stored.principal)
    }

    async fn logout(&self, bearer_token: &str) -> Result<(), AuthServiceError> {
        self.authenticate_bearer(bearer_token).await?;

        let presented: BearerToken = bearer_token.parse()?;

        self.repository
            .revoke_api_token(presented.token_uuid)
            .await?
            .ok_or(AuthServiceError::NotFound)?;

        Ok(())
    }
}

fn constant_time_eq(left: &[u8], right: &[u8]) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .zip(right)
            .fold(0_u8, |acc, (l, r)| acc | (l ^ r))
            == 0
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Verify a username and password and issue a new API token.
    ///
    /// Unknown accounts and wrong passwords are indistinguishable to callers.
    async fn login(
        &self,
        kind: SubjectKind,
        username: &str,
        password: &str,
    ) -> Result<IssuedApiToken, AuthServiceError>;

    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Principal, AuthServiceError>;

    /// Revoke the presented token.
    async fn logout(&self, bearer_token: &str) -> Result<(), AuthServiceError>;
}
