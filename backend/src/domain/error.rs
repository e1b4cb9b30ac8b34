//! Domain-level error types.
//!
//! These errors are transport agnostic. Host applications map them to HTTP
//! responses, CLI exit codes, or any other protocol-specific envelope.

use serde::{Deserialize, Serialize};

use crate::domain::ports::{NotificationError, UserPersistenceError};

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// The requested resource does not exist.
    NotFound,
    /// A collaborator could not be reached.
    ServiceUnavailable,
    /// An unexpected error occurred inside a collaborator.
    InternalError,
}

/// Errors returned by the registration and lookup use cases.
///
/// Collaborator failures are carried verbatim: the wrapped value is exactly
/// what the repository or sender returned.
///
/// # Examples
/// ```
/// use user_registration::domain::{ErrorCode, RegistrationError};
///
/// let err = RegistrationError::invalid_argument("name");
/// assert_eq!(err.code(), ErrorCode::InvalidRequest);
/// assert_eq!(err.to_string(), "invalid argument: name must not be empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    /// Caller input failed validation before any collaborator was called.
    #[error("invalid argument: {field} must not be empty")]
    InvalidArgument {
        /// Name of the rejected input field.
        field: &'static str,
    },
    /// The user repository failed.
    #[error(transparent)]
    Repository(#[from] UserPersistenceError),
    /// The email sender failed after the user was persisted.
    #[error(transparent)]
    Notification(#[from] NotificationError),
}

impl RegistrationError {
    /// Convenience constructor for [`RegistrationError::InvalidArgument`].
    #[must_use]
    pub const fn invalid_argument(field: &'static str) -> Self {
        Self::InvalidArgument { field }
    }

    /// Stable machine-readable error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidArgument { .. } => ErrorCode::InvalidRequest,
            Self::Repository(UserPersistenceError::NotFound { .. }) => ErrorCode::NotFound,
            Self::Repository(UserPersistenceError::Connection { .. })
            | Self::Notification(NotificationError::Delivery { .. }) => {
                ErrorCode::ServiceUnavailable
            }
            Self::Repository(UserPersistenceError::Query { .. })
            | Self::Notification(NotificationError::Rejected { .. }) => ErrorCode::InternalError,
        }
    }
}
