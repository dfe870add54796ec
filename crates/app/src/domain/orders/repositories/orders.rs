//! Orders Repository

use jiff_sqlx::{Date as SqlxDate, Timestamp as SqlxTimestamp};
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::{
    columns::{to_db_amount, try_get_amount},
    domain::{
        orders::records::{OrderRecord, OrderStatus, OrderUuid, PaymentUuid},
        users::records::UserUuid,
    },
};

const ENSURE_PENDING_ORDER_SQL: &str = include_str!("../sql/ensure_pending_order.sql");
const LOCK_PENDING_ORDER_SQL: &str = include_str!("../sql/lock_pending_order.sql");
const GET_PENDING_ORDER_SQL: &str = include_str!("../sql/get_pending_order.sql");
const GET_ORDER_SQL: &str = include_str!("../sql/get_order.sql");
const LIST_USER_ORDERS_SQL: &str = include_str!("../sql/list_user_orders.sql");
const LIST_ORDERS_SQL: &str = include_str!("../sql/list_orders.sql");
const ADJUST_SUBTOTAL_SQL: &str = include_str!("../sql/adjust_subtotal.sql");
const SET_PROMO_CODE_SQL: &str = include_str!("../sql/set_promo_code.sql");
const COMPLETE_ORDER_SQL: &str = include_str!("../sql/complete_order.sql");
const DELETE_ORDER_SQL: &str = include_str!("../sql/delete_order.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Create the user's pending order unless one already exists.
    pub(crate) async fn ensure_pending_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        delivery_fee: u64,
    ) -> Result<(), sqlx::Error> {
        query(ENSURE_PENDING_ORDER_SQL)
            .bind(OrderUuid::new().into_uuid())
            .bind(user.into_uuid())
            .bind(to_db_amount(delivery_fee, "delivery_fee")?)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    /// Fetch the user's pending order, holding a row lock until the transaction ends.
    pub(crate) async fn lock_pending_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<Option<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(LOCK_PENDING_ORDER_SQL)
            .bind(user.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn get_pending_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<Option<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(GET_PENDING_ORDER_SQL)
            .bind(user.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn get_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(GET_ORDER_SQL)
            .bind(order.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_user_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(LIST_USER_ORDERS_SQL)
            .bind(user.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(LIST_ORDERS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    /// Add a signed amount to the order's subtotal.
    pub(crate) async fn adjust_subtotal(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        delta: i64,
    ) -> Result<(), sqlx::Error> {
        query(ADJUST_SUBTOTAL_SQL)
            .bind(order.into_uuid())
            .bind(delta)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn set_promo_code(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        code: &str,
    ) -> Result<(), sqlx::Error> {
        query(SET_PROMO_CODE_SQL)
            .bind(order.into_uuid())
            .bind(code)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn complete_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        payment: Option<PaymentUuid>,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(COMPLETE_ORDER_SQL)
            .bind(order.into_uuid())
            .bind(payment.map(PaymentUuid::into_uuid))
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_ORDER_SQL)
            .bind(order.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for OrderRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status = row
            .try_get::<String, _>("status")?
            .parse::<OrderStatus>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(e),
            })?;

        let promo_discount = row
            .try_get::<Option<i16>, _>("promo_discount")?
            .map(u8::try_from)
            .transpose()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "promo_discount".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: OrderUuid::from_uuid(row.try_get("uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            status,
            order_date: row.try_get::<SqlxDate, _>("order_date")?.to_jiff(),
            subtotal: try_get_amount(row, "subtotal")?,
            delivery_fee: try_get_amount(row, "delivery_fee")?,
            promo_code: row.try_get("promo_code")?,
            promo_discount,
            payment_uuid: row
                .try_get::<Option<Uuid>, _>("payment_uuid")?
                .map(PaymentUuid::from_uuid),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
