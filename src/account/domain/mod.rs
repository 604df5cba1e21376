//! Domain model for user accounts.
//!
//! The account domain models validated user identity data and the
//! requester identity used for authorization decisions, keeping all
//! infrastructure concerns outside of the domain boundary.

mod actor;
mod email;
mod error;
mod ids;
mod user;
mod username;

pub use actor::Actor;
pub use email::EmailAddress;
pub use error::AccountDomainError;
pub use ids::UserId;
pub use user::{PasswordHashString, PersistedUserData, User};
pub use username::Username;
