//! # Admin passwords — Argon2id
//!
//! The blog owner's password is chosen on the setup wizard's welcome step and
//! checked on every `POST /login`. Only the PHC string produced by
//! [`hash_password`] is written to `blog_users.password_hash`; it carries its own
//! salt and parameters (`$argon2id$v=19$m=19456,t=2,p=1$...`), so
//! [`verify_password`] needs nothing else from the row.
//!
//! A row whose hash cannot be parsed is reported as an error rather than a failed
//! login, so a corrupted account shows up in the logs.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::{Error, Result};

/// Hash a password using Argon2id. Returns a PHC-format string.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| Error::PasswordHash(e.to_string()))?;
    Ok(hash.to_string())
}

/// Verify a password against a PHC-format hash string.
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed_hash = PasswordHash::new(hash).map_err(|e| Error::PasswordHash(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
