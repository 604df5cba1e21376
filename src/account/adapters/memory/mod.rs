//! In-memory adapters for account ports.

mod user;

pub use user::InMemoryUserRepository;
