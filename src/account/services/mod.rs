//! Application services for user account management.

mod directory;

pub use directory::{
    RegisterUserRequest, UserDirectoryError, UserDirectoryResult, UserDirectoryService,
};
