//! Promo codes service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::promo_codes::{
        data::NewPromoCode, errors::PromoCodesServiceError, records::PromoCodeRecord,
        repository::PgPromoCodesRepository,
    },
};

/// Largest percentage a promo code may take off.
pub const MAX_PROMO_DISCOUNT: u8 = 100;

#[derive(Debug, Clone)]
pub struct PgPromoCodesService {
    db: Db,
    repository: PgPromoCodesRepository,
}

impl PgPromoCodesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgPromoCodesRepository::new(),
        }
    }
}

#[async_trait]
impl PromoCodesService for PgPromoCodesService {
    async fn create_promo_code(
        &self,
        promo: NewPromoCode,
    ) -> Result<PromoCodeRecord, PromoCodesServiceError> {
        if promo.code.trim().is_empty()
            || promo.discount > MAX_PROMO_DISCOUNT
            || promo.valid_to < promo.valid_from
        {
            return Err(PromoCodesServiceError::InvalidData);
        }

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_promo_code(&mut tx, &promo).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn list_promo_codes(&self) -> Result<Vec<PromoCodeRecord>, PromoCodesServiceError> {
        let mut tx = self.db.begin().await?;

        let promo_codes = self.repository.list_promo_codes(&mut tx).await?;

        tx.commit().await?;

        Ok(promo_codes)
    }
}

#[automock]
#[async_trait]
pub trait PromoCodesService: Send + Sync {
    /// Creates a promo code valid between two inclusive dates.
    async fn create_promo_code(
        &self,
        promo: NewPromoCode,
    ) -> Result<PromoCodeRecord, PromoCodesServiceError>;

    async fn list_promo_codes(&self) -> Result<Vec<PromoCodeRecord>, PromoCodesServiceError>;
}
