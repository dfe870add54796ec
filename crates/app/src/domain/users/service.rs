//! Users service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    auth::hash_password,
    database::Db,
    domain::users::{
        data::NewUser,
        errors::UsersServiceError,
        records::{UserRecord, UserUuid},
        repository::PgUsersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgUsersService {
    db: Db,
    repository: PgUsersRepository,
}

impl PgUsersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgUsersRepository::new(),
        }
    }
}

#[async_trait]
impl UsersService for PgUsersService {
    async fn register_user(&self, user: NewUser) -> Result<UserRecord, UsersServiceError> {
        if user.username.trim().is_empty() || user.password.is_empty() {
            return Err(UsersServiceError::InvalidData);
        }

        let password_hash = hash_password(&user.password).await?;

        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_user(
                &mut tx,
                user.uuid,
                user.username.trim(),
                &password_hash,
                &user.phone_number,
                &user.address,
            )
            .await?;

        tx.commit().await?;

        tracing::info!(user_uuid = %created.uuid, "registered user");

        Ok(created)
    }

    async fn get_user(&self, user: UserUuid) -> Result<UserRecord, UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let user = self.repository.get_user(&mut tx, user).await?;

        tx.commit().await?;

        Ok(user)
    }
}

#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Registers a new user, hashing the supplied password.
    async fn register_user(&self, user: NewUser) -> Result<UserRecord, UsersServiceError>;

    /// Retrieve a single user.
    async fn get_user(&self, user: UserUuid) -> Result<UserRecord, UsersServiceError>;
}
