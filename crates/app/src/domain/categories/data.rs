//! Category Data

use crate::domain::categories::records::CategoryUuid;

/// New Category Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub uuid: CategoryUuid,
    pub name: String,
    pub addons: Option<String>,
    pub removable_items: Option<String>,
}
