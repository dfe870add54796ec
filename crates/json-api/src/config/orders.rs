//! Orders Config

use clap::Args;

use ordering_app::domain::orders::DELIVERY_FEE;

/// Order pricing settings.
#[derive(Debug, Args)]
pub struct OrdersConfig {
    /// Flat delivery fee charged on every new order, in minor units
    #[arg(long, env = "DELIVERY_FEE", default_value_t = DELIVERY_FEE)]
    pub delivery_fee: u64,
}
