//! User accounts for taskdeck.
//!
//! This module covers open self-registration, credential verification,
//! staff-only user listing and deletion, and the requester identity
//! ([`domain::Actor`]) consumed by every authorization check elsewhere in
//! the crate. The module follows hexagonal architecture:
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
