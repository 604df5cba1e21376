//! Authentication primitives: password hashing and bearer tokens.
//!
//! Passwords are stored as Argon2id PHC strings and never leave this
//! module in plaintext. API authentication uses short-lived HS256 JWTs
//! carried in the `Authorization: Bearer` header.

pub mod password;
pub mod token;

pub use password::PasswordError;
pub use token::{TokenClaims, TokenError, TokenService};
