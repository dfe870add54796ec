//! Server configuration module

use clap::Parser;

use crate::config::{
    db::DatabaseConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    orders::OrdersConfig,
    server::ServerRuntimeConfig,
};

pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod orders;
pub(crate) mod server;

/// Ordering JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "ordering-json", about = "Food Ordering JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Observability (traces/metrics) settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Order pricing settings.
    #[command(flatten)]
    pub orders: OrdersConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_apply_when_only_database_url_is_given() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "ordering-json",
            "--database-url",
            "postgres://localhost/ordering",
        ])?;

        assert_eq!(config.server.port, 8698);
        assert_eq!(config.orders.delivery_fee, 500);
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.server.shutdown_grace().as_secs(), 30);
        assert_eq!(config.socket_addr(), "0.0.0.0:8698");

        Ok(())
    }

    #[test]
    fn delivery_fee_can_be_overridden() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "ordering-json",
            "--database-url",
            "postgres://localhost/ordering",
            "--delivery-fee",
            "250",
        ])?;

        assert_eq!(config.orders.delivery_fee, 250);

        Ok(())
    }

    #[test]
    fn pool_size_and_grace_period_can_be_overridden() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "ordering-json",
            "--database-url",
            "postgres://localhost/ordering",
            "--max-connections",
            "4",
            "--shutdown-grace-secs",
            "5",
        ])?;

        assert_eq!(config.database.max_connections, 4);
        assert_eq!(config.server.shutdown_grace().as_secs(), 5);

        Ok(())
    }

    #[test]
    fn parent_context_is_ignored_unless_spans_are_exported() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "ordering-json",
            "--database-url",
            "postgres://localhost/ordering",
            "--otel-parent-propagation",
            "--otel-sample-ratio",
            "4.0",
        ])?;

        assert!(!config.observability.otel.propagates_parent());
        assert!((config.observability.otel.sample_ratio() - 1.0).abs() < f64::EPSILON);

        Ok(())
    }
}
