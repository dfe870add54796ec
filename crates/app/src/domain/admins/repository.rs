//! Admins Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::admins::records::{AdminRecord, AdminUuid};

const CREATE_ADMIN_SQL: &str = include_str!("sql/create_admin.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgAdminsRepository;

impl PgAdminsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_admin(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        admin: AdminUuid,
        username: &str,
        password_hash: &str,
    ) -> Result<AdminRecord, sqlx::Error> {
        query_as::<Postgres, AdminRecord>(CREATE_ADMIN_SQL)
            .bind(admin.into_uuid())
            .bind(username)
            .bind(password_hash)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for AdminRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: AdminUuid::from_uuid(row.try_get("uuid")?),
            username: row.try_get("username")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
