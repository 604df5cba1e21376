//! Domain model for projects and membership.
//!
//! The project domain models validated project data and the membership
//! roster, keeping all infrastructure concerns outside of the domain
//! boundary.

mod error;
mod ids;
mod name;
mod project;

pub use error::ProjectDomainError;
pub use ids::ProjectId;
pub use name::ProjectName;
pub use project::{PersistedProjectData, Project};
