//! HTTP surface for taskdeck.
//!
//! Built on Axum/Tower/Tokio. Request and response bodies are compile-time
//! contracts via serde derive; all errors map to structured JSON responses
//! through [`ApiError`]. Route handlers hold no business logic and
//! delegate to the account, project, and task services.

pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use axum::Router;
use tower_http::trace::TraceLayer;

/// Assembles the application router with shared middleware.
#[must_use]
pub fn app(state: AppState) -> Router {
    routes::router()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
