//! Server configuration.
//!
//! Settings come from command-line flags with environment-variable
//! fallbacks, so the binary works both for local runs and containerized
//! deployments.

use clap::Parser;

/// Default bind address for the HTTP server.
pub const DEFAULT_BIND: &str = "127.0.0.1:8000";

/// Default access-token lifetime in seconds.
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;

/// Runtime configuration for the taskdeck server.
#[derive(Debug, Clone, Parser)]
#[command(name = "taskdeck", about = "Multi-tenant project and task tracker")]
pub struct ServerConfig {
    /// `PostgreSQL` connection URL.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Socket address to listen on.
    #[arg(long, env = "TASKDECK_BIND", default_value = DEFAULT_BIND)]
    pub bind: String,

    /// Shared secret for signing access tokens.
    #[arg(long, env = "TASKDECK_JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,

    /// Access-token lifetime in seconds.
    #[arg(
        long,
        env = "TASKDECK_TOKEN_TTL_SECS",
        default_value_t = DEFAULT_TOKEN_TTL_SECS
    )]
    pub token_ttl_secs: i64,
}
