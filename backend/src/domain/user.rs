//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Repository-assigned user identifier.
///
/// `0` is reserved for users that have not been persisted yet; repositories
/// hand out non-zero identifiers on save.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Identifier carried by candidates that have not been saved.
    pub const UNASSIGNED: Self = Self(0);

    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Whether a repository has assigned this identifier.
    #[must_use]
    pub const fn is_assigned(self) -> bool {
        self.0 != 0
    }

    /// Access the raw integer value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<UserId> for u64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Registered application user.
///
/// ## Invariants
/// - Users returned by a successful registration carry an assigned `id`.
/// - `name` and `email` are non-empty once the user has passed registration.
///
/// `User::default()` is the zero value: unassigned id and empty strings.
///
/// # Examples
/// ```
/// use user_registration::domain::{User, UserId};
///
/// let candidate = User::candidate("eric", "email@mail.com");
/// assert!(!candidate.id().is_assigned());
///
/// let saved = candidate.with_id(UserId::new(1));
/// assert_eq!(saved.id(), UserId::new(1));
/// assert_eq!(saved.email(), "email@mail.com");
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
}

impl User {
    /// Build a user from all of its parts.
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Build an unsaved user from caller input.
    pub fn candidate(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self::new(UserId::UNASSIGNED, name, email)
    }

    /// Return a copy of this user carrying `id`.
    #[must_use]
    pub fn with_id(self, id: UserId) -> Self {
        Self { id, ..self }
    }

    /// Repository-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Name supplied at registration.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Address used for notifications.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}
