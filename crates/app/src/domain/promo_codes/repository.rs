//! Promo Codes Repository

use jiff_sqlx::{Date as SqlxDate, Timestamp as SqlxTimestamp};
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::promo_codes::{data::NewPromoCode, records::PromoCodeRecord};

const CREATE_PROMO_CODE_SQL: &str = include_str!("sql/create_promo_code.sql");
const LIST_PROMO_CODES_SQL: &str = include_str!("sql/list_promo_codes.sql");
const GET_PROMO_CODE_SQL: &str = include_str!("sql/get_promo_code.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgPromoCodesRepository;

impl PgPromoCodesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_promo_code(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        promo: &NewPromoCode,
    ) -> Result<PromoCodeRecord, sqlx::Error> {
        query_as::<Postgres, PromoCodeRecord>(CREATE_PROMO_CODE_SQL)
            .bind(promo.code.trim())
            .bind(i16::from(promo.discount))
            .bind(SqlxDate::from(promo.valid_from))
            .bind(SqlxDate::from(promo.valid_to))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_promo_codes(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<PromoCodeRecord>, sqlx::Error> {
        query_as::<Postgres, PromoCodeRecord>(LIST_PROMO_CODES_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_promo_code(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        code: &str,
    ) -> Result<Option<PromoCodeRecord>, sqlx::Error> {
        query_as::<Postgres, PromoCodeRecord>(GET_PROMO_CODE_SQL)
            .bind(code)
            .fetch_optional(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for PromoCodeRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let discount = u8::try_from(row.try_get::<i16, _>("discount")?).map_err(|e| {
            sqlx::Error::ColumnDecode {
                index: "discount".to_string(),
                source: Box::new(e),
            }
        })?;

        Ok(Self {
            code: row.try_get("code")?,
            discount,
            valid_from: row.try_get::<SqlxDate, _>("valid_from")?.to_jiff(),
            valid_to: row.try_get::<SqlxDate, _>("valid_to")?.to_jiff(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
