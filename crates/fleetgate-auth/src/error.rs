//! Authentication error types.

use std::fmt;

use fleetgate_core::error::GateError;
use thiserror::Error;

/// Which credential field a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialField {
    Email,
    Password,
}

impl fmt::Display for CredentialField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialField::Email => f.write_str("email"),
            CredentialField::Password => f.write_str("password"),
        }
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    /// Caught locally, surfaced per-field, never sent to the network.
    #[error("invalid {field}: {message}")]
    Validation {
        field: CredentialField,
        message: String,
    },

    /// The endpoint rejected the credentials. `message` is the
    /// optional human-readable reason from the error body.
    #[error("invalid credentials")]
    InvalidCredentials { message: Option<String> },

    /// Transport-level failure or an unusable response; worth a retry.
    #[error("network error: {0}")]
    Network(String),
}

impl From<AuthError> for GateError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Validation { field, message } => GateError::Validation {
                field: field.to_string(),
                message,
            },
            AuthError::InvalidCredentials { message } => GateError::AuthenticationFailed {
                reason: message.unwrap_or_else(|| "invalid credentials".into()),
            },
            AuthError::Network(msg) => GateError::Network(msg),
        }
    }
}
