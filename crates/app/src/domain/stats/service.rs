//! Stats service.

use async_trait::async_trait;
use jiff::civil::Date;
use mockall::automock;

use crate::{
    database::Db,
    domain::stats::{
        errors::StatsServiceError,
        models::{BestSeller, DailyStats},
        repository::PgStatsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgStatsService {
    db: Db,
    repository: PgStatsRepository,
}

impl PgStatsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgStatsRepository::new(),
        }
    }
}

#[async_trait]
impl StatsService for PgStatsService {
    async fn daily_stats(&self, date: Date) -> Result<DailyStats, StatsServiceError> {
        let until = date.tomorrow().map_err(|_| StatsServiceError::InvalidData)?;

        let mut tx = self.db.begin().await?;

        let (orders_count, total_income) = self.repository.daily_totals(&mut tx, date).await?;
        let net_income = self.repository.daily_net_income(&mut tx, date).await?;

        let plate_of_the_day = self
            .repository
            .best_sellers(&mut tx, Some(date), Some(until), 1)
            .await?
            .into_iter()
            .next();

        tx.commit().await?;

        Ok(DailyStats {
            date,
            orders_count,
            total_income,
            net_income,
            plate_of_the_day,
        })
    }

    async fn best_sellers(&self, limit: u32) -> Result<Vec<BestSeller>, StatsServiceError> {
        let mut tx = self.db.begin().await?;

        let best_sellers = self
            .repository
            .best_sellers(&mut tx, None, None, limit)
            .await?;

        tx.commit().await?;

        Ok(best_sellers)
    }

    async fn item_of_month(
        &self,
        year: i16,
        month: i8,
    ) -> Result<Option<BestSeller>, StatsServiceError> {
        let from = Date::new(year, month, 1).map_err(|_| StatsServiceError::InvalidData)?;
        let until = from
            .last_of_month()
            .tomorrow()
            .map_err(|_| StatsServiceError::InvalidData)?;

        let mut tx = self.db.begin().await?;

        let item = self
            .repository
            .best_sellers(&mut tx, Some(from), Some(until), 1)
            .await?
            .into_iter()
            .next();

        tx.commit().await?;

        Ok(item)
    }
}

#[automock]
#[async_trait]
pub trait StatsService: Send + Sync {
    /// Sales figures for completed orders dated `date`.
    async fn daily_stats(&self, date: Date) -> Result<DailyStats, StatsServiceError>;

    /// Food items by units sold across all completed orders.
    async fn best_sellers(&self, limit: u32) -> Result<Vec<BestSeller>, StatsServiceError>;

    /// Best seller for one calendar month, if anything sold.
    async fn item_of_month(
        &self,
        year: i16,
        month: i8,
    ) -> Result<Option<BestSeller>, StatsServiceError>;
}
