//! Requester identity for authorization decisions.

use super::UserId;

/// Identity of the user performing an operation.
///
/// Every service operation takes an `Actor` and applies membership-based
/// access control against it. Staff actors bypass membership checks for
/// read and administrative operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    user_id: UserId,
    is_staff: bool,
}

impl Actor {
    /// Creates a requester identity.
    #[must_use]
    pub const fn new(user_id: UserId, is_staff: bool) -> Self {
        Self { user_id, is_staff }
    }

    /// Returns the acting user's identifier.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns whether the actor has staff privileges.
    #[must_use]
    pub const fn is_staff(&self) -> bool {
        self.is_staff
    }
}
