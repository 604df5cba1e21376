//! Port contracts for project and membership management.
//!
//! Ports define infrastructure-agnostic interfaces used by project
//! services.

pub mod repository;

pub use repository::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult};
