//! Taskdeck HTTP server.
//!
//! Wires the `PostgreSQL`-backed repositories into the application
//! services, assembles the Axum router, and serves it on the configured
//! address. Configuration comes from flags or the environment; see
//! `taskdeck --help`.

use clap::Parser;
use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use std::sync::Arc;
use taskdeck::account::adapters::postgres::PostgresUserRepository;
use taskdeck::account::services::UserDirectoryService;
use taskdeck::auth::TokenService;
use taskdeck::config::ServerConfig;
use taskdeck::http::{self, AppState};
use taskdeck::project::adapters::postgres::PostgresProjectRepository;
use taskdeck::project::services::ProjectCatalogService;
use taskdeck::task::adapters::postgres::PostgresTaskRepository;
use taskdeck::task::services::TaskBoardService;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskdeck=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::parse();

    let manager = ConnectionManager::<PgConnection>::new(&config.database_url);
    let pool = Pool::builder().build(manager)?;

    let users = Arc::new(PostgresUserRepository::new(pool.clone()));
    let projects = Arc::new(PostgresProjectRepository::new(pool.clone()));
    let tasks = Arc::new(PostgresTaskRepository::new(pool));
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
        ProjectCatalogService::new(projects, users, board.clone(), clock.clone()),
        board,
        TokenService::new(&config.jwt_secret, config.token_ttl_secs, clock),
    );

    let listener = TcpListener::bind(&config.bind).await?;
    tracing::info!(address = %config.bind, "taskdeck listening");
    axum::serve(listener, http::app(state)).await?;
    Ok(())
}
