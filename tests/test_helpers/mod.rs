//! Shared helpers for HTTP integration tests.
//!
//! Builds the full application router on top of the in-memory adapters so
//! tests exercise routing, extraction, services, and error mapping without
//! a database.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use mockable::DefaultClock;
use serde_json::{Value, json};
use std::sync::Arc;
use taskdeck::account::adapters::memory::InMemoryUserRepository;
use taskdeck::account::domain::{User, Username};
use taskdeck::account::ports::UserRepository;
use taskdeck::account::services::UserDirectoryService;
use taskdeck::auth::{TokenService, password};
use taskdeck::http::{self, AppState};
use taskdeck::project::adapters::memory::InMemoryProjectRepository;
use taskdeck::project::services::ProjectCatalogService;
use taskdeck::task::adapters::memory::InMemoryTaskRepository;
use taskdeck::task::services::TaskBoardService;
use tower::ServiceExt;

const TEST_SECRET: &str = "integration-test-secret";

/// A fully wired application backed by in-memory repositories.
pub struct TestApp {
    router: Router,
    users: Arc<InMemoryUserRepository>,
}

/// Builds a fresh application with empty state.
pub fn test_app() -> TestApp {
    let users = Arc::new(InMemoryUserRepository::new());
    let projects = Arc::new(InMemoryProjectRepository::new());
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let clock = Arc::new(DefaultClock);

    let board = TaskBoardService::new(
        tasks.clone(),
        projects.clone(),
        users.clone(),
        clock.clone(),
    );
    let state = AppState::new(
        UserDirectoryService::new(
            users.clone(),
            projects.clone(),
            tasks.clone(),
            clock.clone(),
        ),
        ProjectCatalogService::new(projects, users.clone(), board.clone(), clock.clone()),
        board,
        TokenService::new(TEST_SECRET, 3600, clock),
    );

    TestApp {
        router: http::app(state),
        users,
    }
}

impl TestApp {
    /// Sends a request and returns the status plus parsed JSON body.
    ///
    /// Empty bodies (e.g. 204 responses) come back as `Value::Null`.
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(value) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(value.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request should build");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("request should not fail at the transport level");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body should collect")
            .to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("body should be JSON")
        };
        (status, value)
    }

    /// Registers a user through the API and returns the response body.
    pub async fn register(&self, username: &str, password_input: &str) -> Value {
        let (status, body) = self
            .request(
                "POST",
                "/api/users/register",
                None,
                Some(json!({"username": username, "password": password_input})),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "registration failed: {body}");
        body
    }

    /// Obtains an access token through the API.
    pub async fn token(&self, username: &str, password_input: &str) -> String {
        let (status, body) = self
            .request(
                "POST",
                "/api/tokens",
                None,
                Some(json!({"username": username, "password": password_input})),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "token issuance failed: {body}");
        body["access"]
            .as_str()
            .expect("token body should carry an access token")
            .to_owned()
    }

    /// Provisions a staff account directly in the repository and returns a
    /// token for it. Staff have no self-service registration path.
    pub async fn seed_staff(&self, username: &str, password_input: &str) -> String {
        let name = Username::new(username).expect("valid username");
        let hash = password::hash(password_input).expect("hashing should succeed");
        let user = User::new_staff(name, None, hash, &DefaultClock);
        self.users
            .store(&user)
            .await
            .expect("storing staff user should succeed");
        self.token(username, password_input).await
    }
}
