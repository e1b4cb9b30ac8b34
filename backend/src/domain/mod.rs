//! Domain primitives, ports and services.
//!
//! Purpose: Define the user entity, the ports the registration use cases
//! depend on, and the service that orchestrates them. Adapters for the
//! driven ports live in host applications.
//!
//! Public surface:
//! - User, UserId (from `user`): registered user and its identifier.
//! - RegistrationError, ErrorCode (from `error`): use-case failures.
//! - UserRegistrationService (from `registration_service`): orchestrator.

pub mod error;
pub mod ports;
pub mod registration_service;
pub mod user;

pub use self::error::{ErrorCode, RegistrationError};
pub use self::registration_service::{DEFAULT_WELCOME_MESSAGE, UserRegistrationService};
pub use self::user::{User, UserId};
