//! Order Repositories

mod details;
mod orders;
mod payments;

pub(crate) use details::PgOrderDetailsRepository;
pub(crate) use orders::PgOrdersRepository;
pub(crate) use payments::PgPaymentsRepository;
