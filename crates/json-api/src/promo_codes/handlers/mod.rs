//! Promo Code Handlers

pub(crate) mod create;
pub(crate) mod index;

#[cfg(test)]
mod tests {
    use jiff::{Timestamp, civil::date};

    use ordering_app::domain::promo_codes::records::PromoCodeRecord;

    pub(super) fn make_promo_code(code: &str, discount: u8) -> PromoCodeRecord {
        PromoCodeRecord {
            code: code.to_string(),
            discount,
            valid_from: date(2026, 10, 1),
            valid_to: date(2026, 10, 31),
            created_at: Timestamp::UNIX_EPOCH,
        }
    }
}
