//! Bearer token wire format and stored verifiers.
//!
//! A token reads `fo_<version>_<token uuid>.<hex secret>`. Only a SHA-256
//! verifier of the secret is ever persisted.

use std::{
    fmt::{self, Write as _},
    str::FromStr,
};

use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};
use thiserror::Error;
use uuid::Uuid;
use zeroize::Zeroize;

/// Leading segment of every bearer token.
pub const API_TOKEN_PREFIX: &str = "fo";

/// Number of random bytes behind a token.
pub const API_TOKEN_SECRET_BYTES: usize = 32;

#[derive(Debug, Error)]
pub enum ApiTokenError {
    #[error("api token format is invalid")]
    InvalidFormat,

    #[error("api token uses an unsupported version")]
    UnsupportedVersion,

    #[error("api token secret encoding is invalid")]
    InvalidSecretEncoding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiTokenVersion {
    V1,
}

impl ApiTokenVersion {
    /// Value stored in `api_tokens.version`.
    #[must_use]
    pub const fn as_i16(self) -> i16 {
        match self {
            Self::V1 => 1,
        }
    }
}

impl fmt::Display for ApiTokenVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.as_i16())
    }
}

impl TryFrom<i16> for ApiTokenVersion {
    type Error = ApiTokenError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::V1),
            _ => Err(ApiTokenError::UnsupportedVersion),
        }
    }
}

/// Random half of a bearer token, wiped on drop.
#[derive(Clone)]
pub struct ApiTokenSecret([u8; API_TOKEN_SECRET_BYTES]);

impl ApiTokenSecret {
    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = [0_u8; API_TOKEN_SECRET_BYTES];

        OsRng.fill_bytes(&mut bytes);

        Self(bytes)
    }

    #[must_use]
    pub const fn from_bytes(bytes: [u8; API_TOKEN_SECRET_BYTES]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; API_TOKEN_SECRET_BYTES] {
        &self.0
    }

    fn to_hex(&self) -> String {
        self.0
            .iter()
            .fold(String::with_capacity(API_TOKEN_SECRET_BYTES * 2), |mut hex, byte| {
                let _ = write!(hex, "{byte:02x}");
                hex
            })
    }

    fn from_hex(hex: &str) -> Option<Self> {
        if hex.len() != API_TOKEN_SECRET_BYTES * 2 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let mut bytes = [0_u8; API_TOKEN_SECRET_BYTES];

        for (byte, pair) in bytes.iter_mut().zip(hex.as_bytes().chunks_exact(2)) {
            *byte = u8::from_str_radix(std::str::from_utf8(pair).ok()?, 16).ok()?;
        }

        Some(Self(bytes))
    }
}

impl fmt::Debug for ApiTokenSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiTokenSecret(**redacted**)")
    }
}

impl Drop for ApiTokenSecret {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// A bearer token as presented by clients.
#[derive(Debug, Clone)]
pub struct BearerToken {
    pub token_uuid: Uuid,
    pub version: ApiTokenVersion,
    pub secret: ApiTokenSecret,
}

impl BearerToken {
    /// A fresh token with a random secret.
    #[must_use]
    pub fn generate() -> Self {
        Self {
            token_uuid: Uuid::now_v7(),
            version: ApiTokenVersion::V1,
            secret: ApiTokenSecret::generate(),
        }
    }

    /// Hex SHA-256 over `{token_uuid}:{version}:{subject_uuid}:{secret}`.
    ///
    /// The subject is part of the digest, so a copied row cannot authenticate
    /// a different account.
    #[must_use]
    pub fn verifier(&self, subject_uuid: &Uuid) -> String {
        let digest = Sha256::new()
            .chain_update(self.token_uuid.simple().to_string())
            .chain_update(b":")
            .chain_update(self.version.as_i16().to_string())
            .chain_update(b":")
            .chain_update(subject_uuid.simple().to_string())
            .chain_update(b":")
            .chain_update(self.secret.to_hex())
            .finalize();

        format!("{digest:x}")
    }
}

impl fmt::Display for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{API_TOKEN_PREFIX}_{}_{}.{}",
            self.version,
            self.token_uuid.simple(),
            self.secret.to_hex()
        )
    }
}

impl FromStr for BearerToken {
    type Err = ApiTokenError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let (head, secret) = token.split_once('.').ok_or(ApiTokenError::InvalidFormat)?;

        let mut segments = head.splitn(3, '_');

        let (Some(API_TOKEN_PREFIX), Some(version), Some(token_uuid)) =
            (segments.next(), segments.next(), segments.next())
        else {
            return Err(ApiTokenError::InvalidFormat);
        };

        let version = match version {
            "v1" => ApiTokenVersion::V1,
            _ => return Err(ApiTokenError::UnsupportedVersion),
        };

        Ok(Self {
            token_uuid: Uuid::try_parse(token_uuid).map_err(|_| ApiTokenError::InvalidFormat)?,
            version,
            secret: ApiTokenSecret::from_hex(secret).ok_or(ApiTokenError::InvalidSecretEncoding)?,
        })
    }
}
