//! Admins service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    auth::hash_password,
    database::Db,
    domain::admins::{
        data::NewAdmin, errors::AdminsServiceError, records::AdminRecord,
        repository::PgAdminsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgAdminsService {
    db: Db,
    repository: PgAdminsRepository,
}

impl PgAdminsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgAdminsRepository::new(),
        }
    }
}

#[async_trait]
impl AdminsService for PgAdminsService {
    async fn create_admin(&self, admin: NewAdmin) -> Result<AdminRecord, AdminsServiceError> {
        if admin.username.trim().is_empty() || admin.password.is_empty() {
            return Err(AdminsServiceError::InvalidData);
        }

        let password_hash = hash_password(&admin.password).await?;

        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_admin(&mut tx, admin.uuid, admin.username.trim(), &password_hash)
            .await?;

        tx.commit().await?;

        Ok(created)
    }
}

#[automock]
#[async_trait]
/// Admin account provisioning.
pub trait AdminsService: Send + Sync {
    /// Creates an admin account with a hashed password.
    async fn create_admin(&self, admin: NewAdmin) -> Result<AdminRecord, AdminsServiceError>;
}
