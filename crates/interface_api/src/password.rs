//! Password hashing with Argon2id
//!
//! Hashing lives at the boundary; the user domain only stores the opaque
//! PHC string produced here.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, PasswordVerifier, SaltString},
    Argon2, PasswordHash,
};
use thiserror::Error;

/// Errors that can occur during password operations
#[derive(Debug, Error)]
pub enum PasswordError {
    /// Failed to hash a password
    #[error("failed to hash password: {0}")]
    Hash(String),

    /// Failed to verify a password
    #[error("failed to verify password: {0}")]
    Verify(String),

    /// The stored hash is not a valid PHC string
    #[error("invalid password hash format")]
    InvalidHash,
}

/// Hashes a password using Argon2id, returning a PHC string
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PasswordError::Hash(e.to_string()))
}

/// Verifies a password against a stored PHC hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(hash).map_err(|_| PasswordError::InvalidHash)?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::Verify(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("Sup3r-secret").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("Sup3r-secret", &hash).unwrap());
        assert!(!verify_password("wrong-password", &hash).unwrap());
    }

    #[test]
    fn test_garbage_hash_is_rejected() {
        assert!(matches!(
            verify_password("anything", "not-a-phc-string"),
            Err(PasswordError::InvalidHash)
        ));
    }
}
