//! Port for outbound email notifications.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors raised by email sender adapters.
    pub enum NotificationError {
        /// The transport failed to deliver the message.
        Delivery { message: String } => "email delivery failed: {message}",
        /// The transport refused the recipient address.
        Rejected { address: String } => "email address rejected: {address}",
    }
}

/// Port for delivering a message to an email address.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Attempt delivery of `content` to `email`.
    async fn send(&self, email: &str, content: &str) -> Result<(), NotificationError>;
}

/// Fixture implementation that accepts and discards every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureEmailSender;

#[async_trait]
impl EmailSender for FixtureEmailSender {
    async fn send(&self, _email: &str, _content: &str) -> Result<(), NotificationError> {
        Ok(())
    }
}
