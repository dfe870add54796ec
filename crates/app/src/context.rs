//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{AuthService, PgAuthService},
    database::{self, Db},
    domain::{
        categories::{CategoriesService, PgCategoriesService},
        feedback::{FeedbackService, PgFeedbackService},
        food_items::{FoodItemsService, PgFoodItemsService},
        orders::{OrdersService, PgOrdersService},
        promo_codes::{PgPromoCodesService, PromoCodesService},
        stats::{PgStatsService, StatsService},
        users::{PgUsersService, UsersService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

/// Tunables for [`AppContext::from_database_url`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppSettings {
    pub max_connections: u32,

    /// Charged on every newly opened order.
    pub delivery_fee: u64,
}

#[derive(Clone)]
pub struct AppContext {
    pub auth: Arc<dyn AuthService>,
    pub users: Arc<dyn UsersService>,
    pub categories: Arc<dyn CategoriesService>,
    pub food_items: Arc<dyn FoodItemsService>,
    pub orders: Arc<dyn OrdersService>,
    pub promo_codes: Arc<dyn PromoCodesService>,
    pub feedback: Arc<dyn FeedbackService>,
    pub stats: Arc<dyn StatsService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str, settings: AppSettings) -> Result<Self, AppInitError> {
        let pool = database::connect(url, settings.max_connections)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool.clone());

        Ok(Self {
            auth: Arc::new(PgAuthService::new(pool)),
            users: Arc::new(PgUsersService::new(db.clone())),
            categories: Arc::new(PgCategoriesService::new(db.clone())),
            food_items: Arc::new(PgFoodItemsService::new(db.clone())),
            orders: Arc::new(PgOrdersService::with_delivery_fee(db.clone(), settings.delivery_fee)),
            promo_codes: Arc::new(PgPromoCodesService::new(db.clone())),
            feedback: Arc::new(PgFeedbackService::new(db.clone())),
            stats: Arc::new(PgStatsService::new(db)),
        })
    }
}
