//! Request extractors for authenticated handlers.

use crate::account::domain::{Actor, User};
use crate::http::{ApiError, AppState};
use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;

/// The authenticated requester, resolved from the `Authorization` header.
///
/// Extraction verifies the bearer token and re-loads the user so that
/// tokens for deleted accounts stop working immediately.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl CurrentUser {
    /// Returns the requester identity for authorization checks.
    #[must_use]
    pub const fn actor(&self) -> Actor {
        self.0.actor()
    }
}

fn missing_credentials() -> ApiError {
    ApiError::Unauthorized("missing or malformed authorization header".to_owned())
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(missing_credentials)?;
        let token = header_value
            .strip_prefix("Bearer ")
            .ok_or_else(missing_credentials)?;

        let claims = state.tokens.verify(token)?;
        let user_id = claims.user_id()?;
        let user = state
            .users
            .lookup(user_id)
            .await?
            .ok_or_else(|| ApiError::Unauthorized("unknown token subject".to_owned()))?;
        Ok(Self(user))
    }
}
