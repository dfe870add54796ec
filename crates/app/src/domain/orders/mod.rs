//! Orders
//!
//! A user's cart is their single `pending` order. Completing it makes it a
//! permanent `completed` order.

pub mod data;
pub mod errors;
pub mod models;
pub mod records;
mod repositories;
pub mod service;

pub use errors::OrdersServiceError;
pub use service::*;
