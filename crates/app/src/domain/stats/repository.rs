//! Stats Repository

use jiff::civil::Date;
use jiff_sqlx::Date as SqlxDate;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::domain::{food_items::records::FoodItemUuid, stats::models::BestSeller};

const DAILY_TOTALS_SQL: &str = include_str!("sql/daily_totals.sql");
const DAILY_NET_INCOME_SQL: &str = include_str!("sql/daily_net_income.sql");
const BEST_SELLERS_SQL: &str = include_str!("sql/best_sellers.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgStatsRepository;

impl PgStatsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Completed order count and summed subtotals for `date`.
    pub(crate) async fn daily_totals(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        date: Date,
    ) -> Result<(u64, u64), sqlx::Error> {
        let row = query(DAILY_TOTALS_SQL)
            .bind(SqlxDate::from(date))
            .fetch_one(&mut **tx)
            .await?;

        Ok((
            non_negative(row.try_get("orders_count")?, "orders_count")?,
            non_negative(row.try_get("total_income")?, "total_income")?,
        ))
    }

    pub(crate) async fn daily_net_income(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        date: Date,
    ) -> Result<i64, sqlx::Error> {
        query_scalar(DAILY_NET_INCOME_SQL)
            .bind(SqlxDate::from(date))
            .fetch_one(&mut **tx)
            .await
    }

    /// Best sellers for orders dated in `[from, until)`; open bounds are unrestricted.
    pub(crate) async fn best_sellers(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        from: Option<Date>,
        until: Option<Date>,
        limit: u32,
    ) -> Result<Vec<BestSeller>, sqlx::Error> {
        query_as::<Postgres, BestSeller>(BEST_SELLERS_SQL)
            .bind(from.map(SqlxDate::from))
            .bind(until.map(SqlxDate::from))
            .bind(i64::from(limit))
            .fetch_all(&mut **tx)
            .await
    }
}

fn non_negative(value: i64, col: &str) -> Result<u64, sqlx::Error> {
    u64::try_from(value).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

impl<'r> FromRow<'r, PgRow> for BestSeller {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            food_item_uuid: FoodItemUuid::from_uuid(row.try_get("food_item_uuid")?),
            name: row.try_get("name")?,
            quantity_sold: non_negative(row.try_get("quantity_sold")?, "quantity_sold")?,
        })
    }
}
