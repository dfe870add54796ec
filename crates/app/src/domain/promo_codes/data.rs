//! Promo Code Data

use jiff::civil::Date;

/// New Promo Code Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPromoCode {
    pub code: String,
    pub discount: u8,
    pub valid_from: Date,
    pub valid_to: Date,
}
