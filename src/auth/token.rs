//! HS256 bearer-token issuance and verification.

use crate::account::domain::{User, UserId};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Errors returned by token operations.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    /// Encoding the token failed.
    #[error("failed to issue token: {0}")]
    Issue(Arc<jsonwebtoken::errors::Error>),

    /// The token is missing, malformed, expired, or has a bad signature.
    #[error("invalid bearer token")]
    Invalid,
}

/// Claims carried in an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject: the user identifier as a UUID string.
    pub sub: String,
    /// Expiry as a Unix timestamp.
    pub exp: i64,
}

impl TokenClaims {
    /// Parses the subject claim into a [`UserId`].
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Invalid`] when the subject is not a UUID.
    pub fn user_id(&self) -> Result<UserId, TokenError> {
        Uuid::parse_str(&self.sub)
            .map(UserId::from_uuid)
            .map_err(|_| TokenError::Invalid)
    }
}

/// Issues and verifies HS256 access tokens.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_secs: i64,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl TokenService {
    /// Creates a token service from a shared secret.
    #[must_use]
    pub fn new(secret: &str, ttl_secs: i64, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
            clock,
        }
    }

    /// Issues an access token for the given user.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Issue`] when encoding fails.
    pub fn issue(&self, user: &User) -> Result<String, TokenError> {
        let claims = TokenClaims {
            sub: user.id().into_inner().to_string(),
            exp: self.clock.utc().timestamp() + self.ttl_secs,
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|err| TokenError::Issue(Arc::new(err)))
    }

    /// Verifies a token and returns its claims.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Invalid`] when the token is malformed, has a
    /// bad signature, or is expired.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        decode::<TokenClaims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| TokenError::Invalid)
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Key material stays out of debug output.
        f.debug_struct("TokenService")
            .field("ttl_secs", &self.ttl_secs)
            .finish_non_exhaustive()
    }
}
