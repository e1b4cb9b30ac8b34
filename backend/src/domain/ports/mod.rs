//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod email_sender;
mod user_registration;
mod user_repository;

#[cfg(test)]
pub use email_sender::MockEmailSender;
pub use email_sender::{EmailSender, FixtureEmailSender, NotificationError};
pub use user_registration::UserRegistration;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{
    FIXTURE_USER_ID, FixtureUserRepository, UserPersistenceError, UserRepository,
};
