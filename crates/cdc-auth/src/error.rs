//! Error types for authentication operations

use cdc_types::InvalidParameterError;

/// Errors that can occur while loading credentials or signing
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Credential value rejected
    #[error(transparent)]
    InvalidParameter(#[from] InvalidParameterError),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    /// The MAC could not be computed
    #[error("failed to write signature: {0}")]
    Signing(String),
}

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;
