//! Taskdeck: a multi-tenant project and task tracker.
//!
//! Authenticated users create projects, manage project membership, and
//! create, assign, and track tasks within those projects over an HTTP JSON
//! API. Access control is membership-based: most project-scoped operations
//! require the requester to be a member of the project, while staff users
//! bypass membership checks for read and administrative operations.
//!
//! # Architecture
//!
//! Taskdeck follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! # Modules
//!
//! - [`account`]: User registration, lookup, and administration
//! - [`project`]: Project aggregates and membership management
//! - [`task`]: Task aggregates, assignment, and status tracking
//! - [`auth`]: Password hashing and bearer-token issuance
//! - [`http`]: Axum routing, extractors, and error mapping
//! - [`config`]: Server configuration

pub mod account;
pub mod auth;
pub mod config;
pub mod http;
pub mod project;
pub mod task;
