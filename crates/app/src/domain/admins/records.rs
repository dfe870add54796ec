//! Admin Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Admin UUID
pub type AdminUuid = TypedUuid<AdminRecord>;

/// Admin Record
#[derive(Debug, Clone)]
pub struct AdminRecord {
    pub uuid: AdminUuid,
    pub username: String,
    pub created_at: Timestamp,
}
