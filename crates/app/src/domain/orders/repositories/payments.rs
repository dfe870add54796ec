//! Payments Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::orders::{
    data::NewPayment,
    records::{PaymentRecord, PaymentUuid},
};

const CREATE_PAYMENT_SQL: &str = include_str!("../sql/create_payment.sql");

/// Status recorded for payments captured at checkout.
const PAYMENT_STATUS_PAID: &str = "paid";

#[derive(Debug, Clone, Default)]
pub(crate) struct PgPaymentsRepository;

impl PgPaymentsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_payment(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        payment: &NewPayment,
    ) -> Result<PaymentRecord, sqlx::Error> {
        query_as::<Postgres, PaymentRecord>(CREATE_PAYMENT_SQL)
            .bind(payment.uuid.into_uuid())
            .bind(&payment.payment_method)
            .bind(PAYMENT_STATUS_PAID)
            .bind(&payment.transaction_id)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for PaymentRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: PaymentUuid::from_uuid(row.try_get("uuid")?),
            payment_method: row.try_get("payment_method")?,
            payment_status: row.try_get("payment_status")?,
            transaction_id: row.try_get("transaction_id")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
