//! Project and membership management for taskdeck.
//!
//! A project is a named collection of members and tasks. Membership drives
//! authorization: most project-scoped operations require the requester to
//! be a member, and task assignment is restricted to members. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
