//! Food Item Records

use jiff::Timestamp;

use crate::{domain::categories::records::CategoryUuid, uuids::TypedUuid};

/// Food Item UUID
pub type FoodItemUuid = TypedUuid<FoodItemRecord>;

/// Food Item Record
///
/// Prices are in minor currency units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodItemRecord {
    pub uuid: FoodItemUuid,
    pub category_uuid: CategoryUuid,
    pub name: String,
    pub description: Option<String>,
    pub price: u64,
    pub price_to_make: u64,
    pub photo: Option<String>,
    pub created_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}
