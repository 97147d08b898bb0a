//! Password hashing for the login and refresh endpoints.
//!
//! The server never receives the plain password, only its SHA-512 digest
//! encoded as lowercase hex.

use data_encoding::HEXLOWER;
use serde::Serialize;
use sha2::{Digest, Sha512};

/// Hashes a password the way the server expects it.
#[must_use]
pub fn hash_password(password: &str) -> String {
    let digest = Sha512::digest(password.as_bytes());
    HEXLOWER.encode(&digest)
}

/// `/logIn` request body.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub pwd: String,
}

impl LoginRequest {
    #[must_use]
    pub fn from_password(password: &str) -> Self {
        Self {
            pwd: hash_password(password),
        }
    }
}
