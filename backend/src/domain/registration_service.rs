//! User registration domain service.
//!
//! Registration persists the user first and only then sends the welcome
//! message. A failed send is reported to the caller but the stored user is
//! left in place: there is no rollback and no retry.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::config::RegistrationSettings;
use crate::domain::ports::{EmailSender, UserRegistration, UserRepository};
use crate::domain::{RegistrationError, User, UserId};

/// Message body sent to newly registered users unless configured otherwise.
pub const DEFAULT_WELCOME_MESSAGE: &str = "welcome to join us";

/// Registration service implementing the [`UserRegistration`] driving port.
pub struct UserRegistrationService<R, S> {
    user_repo: Arc<R>,
    email_sender: Arc<S>,
    welcome_message: String,
}

// Cloning shares the collaborators, so `R` and `S` need not be `Clone`.
impl<R, S> Clone for UserRegistrationService<R, S> {
    fn clone(&self) -> Self {
        Self {
            user_repo: Arc::clone(&self.user_repo),
            email_sender: Arc::clone(&self.email_sender),
            welcome_message: self.welcome_message.clone(),
        }
    }
}

impl<R, S> UserRegistrationService<R, S> {
    /// Create a new service with the given collaborators.
    pub fn new(user_repo: Arc<R>, email_sender: Arc<S>) -> Self {
        Self {
            user_repo,
            email_sender,
            welcome_message: DEFAULT_WELCOME_MESSAGE.to_owned(),
        }
    }

    /// Create a service using the welcome message from `settings`.
    pub fn from_settings(
        user_repo: Arc<R>,
        email_sender: Arc<S>,
        settings: &RegistrationSettings,
    ) -> Self {
        Self::new(user_repo, email_sender).with_welcome_message(settings.welcome_message())
    }

    /// Replace the welcome message body.
    #[must_use]
    pub fn with_welcome_message(mut self, message: impl Into<String>) -> Self {
        self.welcome_message = message.into();
        self
    }

    /// Body sent to each newly registered user.
    pub fn welcome_message(&self) -> &str {
        self.welcome_message.as_str()
    }

    fn validate(candidate: &User) -> Result<(), RegistrationError> {
        if candidate.name().is_empty() {
            return Err(RegistrationError::invalid_argument("name"));
        }
        if candidate.email().is_empty() {
            return Err(RegistrationError::invalid_argument("email"));
        }
        Ok(())
    }
}

#[async_trait]
impl<R, S> UserRegistration for UserRegistrationService<R, S>
where
    R: UserRepository,
    S: EmailSender,
{
    async fn register(&self, name: &str, email: &str) -> Result<User, RegistrationError> {
        let candidate = User::candidate(name, email);
        if let Err(error) = Self::validate(&candidate) {
            warn!(%error, "registration rejected");
            return Err(error);
        }

        let user = self.user_repo.save(&candidate).await.map_err(|error| {
            warn!(%error, "user repository save failed");
            RegistrationError::from(error)
        })?;
        debug!(user_id = %user.id(), "user persisted");

        // The user stays persisted when the welcome message cannot be sent.
        self.email_sender
            .send(user.email(), &self.welcome_message)
            .await
            .map_err(|error| {
                warn!(user_id = %user.id(), %error, "welcome message not sent");
                RegistrationError::from(error)
            })?;

        info!(user_id = %user.id(), "user registered");
        Ok(user)
    }

    async fn find(&self, id: UserId) -> Result<User, RegistrationError> {
        debug!(user_id = %id, "finding user");
        self.user_repo
            .get(id)
            .await
            .map_err(RegistrationError::from)
    }
}

#[cfg(test)]
#[path = "registration_service_tests.rs"]
mod tests;
