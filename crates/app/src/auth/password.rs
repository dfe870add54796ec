//! Password hashing for user and admin credentials.
//!
//! Hashing and verification run on tokio's blocking pool.

use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{self, SaltString},
};
use rand::rngs::OsRng;
use thiserror::Error;
use tokio::task::{self, JoinError};

/// Well-formed hash with the default argon2 parameters that no password matches.
///
/// Logins for unknown accounts verify against it, taking as long as a wrong password.
pub const UNKNOWN_ACCOUNT_PASSWORD_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("failed to hash password")]
    Hash(#[source] password_hash::Error),

    #[error("stored password hash is malformed")]
    MalformedHash(#[source] password_hash::Error),

    #[error("password hashing task failed")]
    Task(#[source] JoinError),
}

/// Hash a password into a PHC string with a fresh random salt.
///
/// # Errors
///
/// Returns an error if argon2 rejects the input or the blocking task fails.
pub async fn hash_password(password: &str) -> Result<String, PasswordError> {
    let password = password.to_owned();

    task::spawn_blocking(move || hash_blocking(&password))
        .await
        .map_err(PasswordError::Task)?
}

/// Check a password against a stored PHC string.
///
/// # Errors
///
/// Returns an error if the stored hash cannot be parsed, verification fails for a
/// reason other than a mismatch, or the blocking task fails.
pub async fn verify_password(password: &str, password_hash: &str) -> Result<bool, PasswordError> {
    let password = password.to_owned();
    let password_hash = password_hash.to_owned();

    task::spawn_blocking(move || verify_blocking(&password, &password_hash))
        .await
        .map_err(PasswordError::Task)?
}

fn hash_blocking(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(PasswordError::Hash)
}

fn verify_blocking(password: &str, password_hash: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(password_hash).map_err(PasswordError::MalformedHash)?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(error) => Err(PasswordError::Hash(error)),
    }
}
