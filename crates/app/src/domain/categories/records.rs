//! Category Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Category UUID
pub type CategoryUuid = TypedUuid<CategoryRecord>;

/// Category Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRecord {
    pub uuid: CategoryUuid,
    pub name: String,
    pub addons: Option<String>,
    pub removable_items: Option<String>,
    pub created_at: Timestamp,
}
