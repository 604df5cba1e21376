//! Handler for access-token issuance.

use crate::http::{ApiError, AppState};
use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub(super) struct TokenRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Serialize)]
pub(super) struct TokenBody {
    access: String,
    token_type: &'static str,
}

/// `POST /api/tokens` - exchanges credentials for a bearer token.
pub(super) async fn obtain(
    State(state): State<AppState>,
    Json(body): Json<TokenRequestBody>,
) -> Result<Json<TokenBody>, ApiError> {
    let user = state
        .users
        .authenticate(&body.username, &body.password)
        .await?;
    let access = state.tokens.issue(&user)?;
    Ok(Json(TokenBody {
        access,
        token_type: "Bearer",
    }))
}
