//! Task tracking for taskdeck.
//!
//! A task is a unit of work belonging to one project, optionally assigned
//! to one project member, with a status in TODO, `IN_PROGRESS`, or DONE.
//! Assignment is validated against project membership in the service layer,
//! and task visibility is scoped to projects the requester is a member of.
//! The module follows hexagonal architecture:
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
