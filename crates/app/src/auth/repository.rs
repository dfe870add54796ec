//! Auth repository.

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as, query_scalar};
use uuid::Uuid;

use crate::auth::{
    ApiTokenVersion, SubjectKind,
    models::{ActiveApiToken, ApiTokenMetadata, Credentials, NewApiToken, Principal},
};

const FIND_USER_CREDENTIALS_SQL: &str = include_str!("sql/find_user_credentials.sql");
const FIND_ADMIN_CREDENTIALS_SQL: &str = include_str!("sql/find_admin_credentials.sql");
const CREATE_API_TOKEN_SQL: &str = include_str!("sql/create_api_token.sql");
const FIND_ACTIVE_API_TOKEN_SQL: &str = include_str!("sql/find_active_api_token.sql");
const REVOKE_API_TOKEN_SQL: &str = include_str!("sql/revoke_api_token.sql");

#[derive(Debug, Clone)]
pub(crate) struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn find_credentials(
        &self,
        kind: SubjectKind,
        username: &str,
    ) -> Result<Option<Credentials>, sqlx::Error> {
        let sql = match kind {
            SubjectKind::User => FIND_USER_CREDENTIALS_SQL,
            SubjectKind::Admin => FIND_ADMIN_CREDENTIALS_SQL,
        };

        query_as::<Postgres, Credentials>(sql)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
    }

    pub(crate) async fn create_api_token(
        &self,
        token: &NewApiToken,
    ) -> Result<ApiTokenMetadata, sqlx::Error> {
        query_as::<Postgres, ApiTokenMetadata>(CREATE_API_TOKEN_SQL)
            .bind(token.uuid)
            .bind(token.principal.subject_uuid())
            .bind(token.principal.kind().as_str())
            .bind(token.version.as_i16())
            .bind(&token.token_hash)
            .bind(token.lifetime_hours)
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn find_active_api_token(
        &self,
        token_uuid: Uuid,
        version: ApiTokenVersion,
    ) -> Result<Option<ActiveApiToken>, sqlx::Error> {
        query_as::<Postgres, ActiveApiToken>(FIND_ACTIVE_API_TOKEN_SQL)
            .bind(token_uuid)
            .bind(version.as_i16())
            .fetch_optional(&self.pool)
            .await
    }

    pub(crate) async fn revoke_api_token(
        &self,
        token_uuid: Uuid,
    ) -> Result<Option<Uuid>, sqlx::Error> {
        query_scalar::<Postgres, Uuid>(REVOKE_API_TOKEN_SQL)
            .bind(token_uuid)
            .fetch_optional(&self.pool)
            .await
    }
}

fn try_get_principal(row: &PgRow) -> Result<Principal, sqlx::Error> {
    let kind = row
        .try_get::<String, _>("subject_kind")?
        .parse::<SubjectKind>()
        .map_err(|e| sqlx::Error::ColumnDecode {
            index: "subject_kind".to_string(),
            source: Box::new(e),
        })?;

    Ok(Principal::from_subject(kind, row.try_get("subject_uuid")?))
}

fn try_get_version(row: &PgRow) -> Result<ApiTokenVersion, sqlx::Error> {
    ApiTokenVersion::try_from(row.try_get::<i16, _>("version")?).map_err(|e| {
        sqlx::Error::ColumnDecode {
            index: "version".to_string(),
            source: Box::new(e),
        }
    })
}

impl<'r> FromRow<'r, PgRow> for Credentials {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: row.try_get("uuid")?,
            password_hash: row.try_get("password_hash")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for ActiveApiToken {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            principal: try_get_principal(row)?,
            version: try_get_version(row)?,
            token_hash: row.try_get("token_hash")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for ApiTokenMetadata {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: row.try_get("uuid")?,
            principal: try_get_principal(row)?,
            version: try_get_version(row)?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            expires_at: row
                .try_get::<Option<SqlxTimestamp>, _>("expires_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
