//! Error types for the Fleetgate system.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GateError {
    #[error("Validation error on {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Authentication failed: {reason}")]
    AuthenticationFailed { reason: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type GateResult<T> = Result<T, GateError>;
