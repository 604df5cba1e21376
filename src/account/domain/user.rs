//! User aggregate root.

use super::{Actor, EmailAddress, UserId, Username};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque password hash in PHC string format.
///
/// Produced by [`crate::auth::password::hash`] and never exposed through
/// API responses. The domain treats it as an opaque token.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordHashString(String);

impl PasswordHashString {
    /// Wraps an existing PHC-format hash string.
    #[must_use]
    pub const fn from_phc(value: String) -> Self {
        Self(value)
    }

    /// Returns the hash as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHashString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Hash material stays out of logs and debug output.
        f.write_str("PasswordHashString(..)")
    }
}

/// User aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    username: Username,
    email: Option<EmailAddress>,
    password_hash: PasswordHashString,
    is_staff: bool,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted user aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedUserData {
    /// Persisted user identifier.
    pub id: UserId,
    /// Persisted username.
    pub username: Username,
    /// Persisted email address, if any.
    pub email: Option<EmailAddress>,
    /// Persisted password hash.
    pub password_hash: PasswordHashString,
    /// Persisted staff flag.
    pub is_staff: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new non-staff user account.
    #[must_use]
    pub fn new(
        username: Username,
        email: Option<EmailAddress>,
        password_hash: PasswordHashString,
        clock: &(impl Clock + ?Sized),
    ) -> Self {
        Self {
            id: UserId::new(),
            username,
            email,
            password_hash,
            is_staff: false,
            created_at: clock.utc(),
        }
    }

    /// Creates a new staff user account.
    ///
    /// Staff accounts bypass membership checks for read and administrative
    /// operations. There is no self-service path to staff status; staff
    /// accounts are provisioned directly.
    #[must_use]
    pub fn new_staff(
        username: Username,
        email: Option<EmailAddress>,
        password_hash: PasswordHashString,
        clock: &(impl Clock + ?Sized),
    ) -> Self {
        Self {
            is_staff: true,
            ..Self::new(username, email, password_hash, clock)
        }
    }

    /// Reconstructs a user from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedUserData) -> Self {
        Self {
            id: data.id,
            username: data.username,
            email: data.email,
            password_hash: data.password_hash,
            is_staff: data.is_staff,
            created_at: data.created_at,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the email address, if any.
    #[must_use]
    pub const fn email(&self) -> Option<&EmailAddress> {
        self.email.as_ref()
    }

    /// Returns the stored password hash.
    #[must_use]
    pub const fn password_hash(&self) -> &PasswordHashString {
        &self.password_hash
    }

    /// Returns whether this account has staff privileges.
    #[must_use]
    pub const fn is_staff(&self) -> bool {
        self.is_staff
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the requester identity for this user.
    #[must_use]
    pub const fn actor(&self) -> Actor {
        Actor::new(self.id, self.is_staff)
    }
}
