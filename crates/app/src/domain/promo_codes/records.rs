//! Promo Code Records

use jiff::{Timestamp, civil::Date};

/// Promo Code Record
///
/// `discount` is a percentage taken off the order subtotal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromoCodeRecord {
    pub code: String,
    pub discount: u8,
    pub valid_from: Date,
    pub valid_to: Date,
    pub created_at: Timestamp,
}

impl PromoCodeRecord {
    /// Whether the code can be redeemed on `day`. Both bounds are inclusive.
    #[must_use]
    pub fn is_valid_on(&self, day: Date) -> bool {
        self.valid_from <= day && day <= self.valid_to
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn validity_window_is_inclusive() {
        let promo = PromoCodeRecord {
            code: "AUTUMN".to_string(),
            discount: 10,
            valid_from: date(2026, 10, 1),
            valid_to: date(2026, 10, 31),
            created_at: Timestamp::UNIX_EPOCH,
        };

        assert!(!promo.is_valid_on(date(2026, 9, 30)));
        assert!(promo.is_valid_on(date(2026, 10, 1)));
        assert!(promo.is_valid_on(date(2026, 10, 31)));
        assert!(!promo.is_valid_on(date(2026, 11, 1)));
    }
}
