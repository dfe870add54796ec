//! Database connection management

use sqlx::{
    PgPool, Postgres, Transaction,
    migrate::MigrateError,
    postgres::{PgConnectOptions, PgPoolOptions},
};

/// Pool size used by the API server unless configured otherwise.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Begin the transaction backing a single service operation.
    ///
    /// Dropping the transaction without committing rolls it back, so every early
    /// return releases the connection with no partial writes.
    ///
    /// # Errors
    ///
    /// Returns an error when a connection cannot be acquired or the transaction fails to start.
    pub async fn begin(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }
}

/// Session time zone for every pooled connection.
///
/// Order dates come from `CURRENT_DATE`, which must agree with the UTC "today" the
/// API uses for promo codes and daily stats.
pub const SESSION_TIME_ZONE: &str = "UTC";

/// Connection options for `database_url` with the session pinned to [`SESSION_TIME_ZONE`].
///
/// # Errors
///
/// Returns an error if the URL cannot be parsed.
pub fn connect_options(database_url: &str) -> Result<PgConnectOptions, sqlx::Error> {
    Ok(database_url
        .parse::<PgConnectOptions>()?
        .options([("timezone", SESSION_TIME_ZONE)]))
}

/// Connect to `PostgreSQL` with a pool of at most `max_connections`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(connect_options(database_url)?)
        .await
}

/// Apply any pending schema migrations.
///
/// # Errors
///
/// Returns an error if a migration fails to apply.
pub async fn migrate(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}
