//! Port contracts for user account management.
//!
//! Ports define infrastructure-agnostic interfaces used by account services.

pub mod repository;

pub use repository::{UserRepository, UserRepositoryError, UserRepositoryResult};
