//! User Data

use std::fmt;

use crate::domain::users::records::UserUuid;

/// New User Data
///
/// Carries the plaintext password only until the service hashes it.
#[derive(Clone, PartialEq)]
pub struct NewUser {
    pub uuid: UserUuid,
    pub username: String,
    pub password: String,
    pub phone_number: String,
    pub address: String,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("uuid", &self.uuid)
            .field("username", &self.username)
            .field("password", &"**redacted**")
            .field("phone_number", &self.phone_number)
            .field("address", &self.address)
            .finish()
    }
}
