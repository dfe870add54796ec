//! Admin Data

use std::fmt;

use crate::domain::admins::records::AdminUuid;

/// New Admin Data
#[derive(Clone, PartialEq)]
pub struct NewAdmin {
    pub uuid: AdminUuid,
    pub username: String,
    pub password: String,
}

impl fmt::Debug for NewAdmin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewAdmin")
            .field("uuid", &self.uuid)
            .field("username", &self.username)
            .field("password", &"**redacted**")
            .finish()
    }
}
