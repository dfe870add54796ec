//! Domain services

pub mod admins;
pub mod categories;
pub mod feedback;
pub mod food_items;
pub mod orders;
pub mod promo_codes;
pub mod stats;
pub mod users;
