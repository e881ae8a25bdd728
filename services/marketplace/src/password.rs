//! Password hashing with Argon2id
//!
//! Hashes are stored as PHC strings, which carry the salt and the cost
//! parameters they were produced with.

use anyhow::Result;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use tracing::warn;

/// Well-formed Argon2id hash with default cost that matches no password
///
/// Login verifies against it when the email is unknown, so both outcomes
/// cost one hash computation.
pub const DUMMY_PASSWORD_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$z7e3W7U8cc8JKkZQtGN/YA$TXTHaShiJqKjU4yen52WBJ+FN2V7eNj37x344MMTw/4";

/// Hash a plaintext password with a fresh random salt
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut rand::thread_rng());
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?
        .to_string();

    Ok(password_hash)
}

/// Check a plaintext password against a stored hash
///
/// A stored value that is not a valid PHC string never matches.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    let parsed_hash = match PasswordHash::new(password_hash) {
        Ok(hash) => hash,
        Err(e) => {
            warn!("Stored password hash could not be parsed: {}", e);
            return false;
        }
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}
