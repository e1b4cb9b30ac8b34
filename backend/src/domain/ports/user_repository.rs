//! Port abstraction for user persistence adapters and their errors.
//!
//! Adapters own identifier assignment: [`UserRepository::save`] receives an
//! unsaved candidate and returns the stored copy carrying its new
//! [`UserId`].

use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// No user is stored under the requested identifier.
        NotFound { id: UserId } => "user {id} not found",
    }
}

/// Port for user storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a user and return the stored copy with an assigned identifier.
    async fn save(&self, user: &User) -> Result<User, UserPersistenceError>;

    /// Fetch a user by identifier.
    ///
    /// Missing users are reported as [`UserPersistenceError::NotFound`].
    async fn get(&self, id: UserId) -> Result<User, UserPersistenceError>;
}

/// Identifier handed out by [`FixtureUserRepository`].
pub const FIXTURE_USER_ID: UserId = UserId::new(1);

/// Fixture implementation for wiring tests without real storage.
///
/// Saved users are echoed back with [`FIXTURE_USER_ID`] and discarded, so
/// every lookup reports [`UserPersistenceError::NotFound`].
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserRepository;

#[async_trait]
impl UserRepository for FixtureUserRepository {
    async fn save(&self, user: &User) -> Result<User, UserPersistenceError> {
        Ok(user.clone().with_id(FIXTURE_USER_ID))
    }

    async fn get(&self, id: UserId) -> Result<User, UserPersistenceError> {
        Err(UserPersistenceError::not_found(id))
    }
}
