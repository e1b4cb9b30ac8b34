//! User registration library.
//!
//! Registers users through a [`domain::ports::UserRepository`] and welcomes
//! them through a [`domain::ports::EmailSender`]; hosts supply both adapters.

pub mod config;
pub mod domain;
pub mod telemetry;

pub use config::RegistrationSettings;
pub use domain::ports::UserRegistration;
pub use domain::{RegistrationError, User, UserId, UserRegistrationService};
pub use telemetry::{LogFormat, init_tracing};
