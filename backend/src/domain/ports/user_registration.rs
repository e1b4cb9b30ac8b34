//! Driving port for the registration and lookup use cases.
//!
//! Host applications depend on this trait rather than the concrete service so
//! their own tests can substitute the whole use case.

use async_trait::async_trait;

use crate::domain::{RegistrationError, User, UserId};

/// Domain use-case port for registering and finding users.
#[async_trait]
pub trait UserRegistration: Send + Sync {
    /// Validate input, persist the user, then send the welcome message.
    async fn register(&self, name: &str, email: &str) -> Result<User, RegistrationError>;

    /// Fetch a previously registered user.
    async fn find(&self, id: UserId) -> Result<User, RegistrationError>;
}
