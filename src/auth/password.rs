//! Argon2id password hashing and verification.

use crate::account::domain::PasswordHashString;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::password_hash::rand_core::OsRng;
use argon2::Argon2;
use thiserror::Error;

/// Fixed PHC string for burning verification work when no account matches.
///
/// The digest is not the hash of any password, so verification always
/// fails; its parameters match the [`Argon2::default`] cost used by
/// [`hash`].
const DUMMY_PHC: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$AAAAAAAAAAAAAAAAAAAAAA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Errors returned by password hashing operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    /// Hashing the password failed.
    #[error("failed to hash password: {0}")]
    Hash(String),

    /// The stored hash is not a valid PHC string.
    #[error("stored password hash is malformed: {0}")]
    MalformedHash(String),
}

/// Hashes a plaintext password with Argon2id and a random salt.
///
/// # Errors
///
/// Returns [`PasswordError::Hash`] when the underlying hasher fails.
pub fn hash(password: &str) -> Result<PasswordHashString, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let hashed = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|err| PasswordError::Hash(err.to_string()))?;
    Ok(PasswordHashString::from_phc(hashed.to_string()))
}

/// Verifies a plaintext password against a stored hash.
///
/// Returns `false` on mismatch; parsing failures of the stored hash are
/// reported as errors rather than treated as mismatches.
///
/// # Errors
///
/// Returns [`PasswordError::MalformedHash`] when the stored value is not a
/// valid PHC string.
pub fn verify(password: &str, stored: &PasswordHashString) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(stored.as_str())
        .map_err(|err| PasswordError::MalformedHash(err.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Performs the same Argon2 work as [`verify`] against [`DUMMY_PHC`].
///
/// Called when authentication targets an unknown username so response
/// timing does not reveal whether an account exists. The outcome is
/// discarded; the dummy digest never matches.
pub fn verify_dummy(password: &str) {
    if let Ok(parsed) = PasswordHash::new(DUMMY_PHC) {
        let _outcome = Argon2::default().verify_password(password.as_bytes(), &parsed);
    }
}
