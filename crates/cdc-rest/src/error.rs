//! Error types for REST API operations

use cdc_auth::AuthError;
use cdc_types::{ApiErrorCode, InvalidParameterError, ResponseError};

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Invalid request parameters, rejected before any network call
    #[error(transparent)]
    InvalidParameter(#[from] InvalidParameterError),

    /// Missing API credentials for private endpoint
    #[error("Authentication required for this endpoint")]
    AuthRequired,

    /// Signing the request failed
    #[error("failed to create signature: {0}")]
    Signature(#[source] AuthError),

    /// HTTP request failed
    #[error("failed to execute request: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to encode the request body
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Failed to parse response
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The exchange rejected the request
    #[error("error received in response: {0}")]
    Response(#[from] ResponseError),

    /// Successful response without a `result` payload
    #[error("response did not include a result")]
    MissingResult,
}

impl RestError {
    /// The classified exchange error, if this is one
    pub fn response_error(&self) -> Option<&ResponseError> {
        match self {
            Self::Response(err) => Some(err),
            _ => None,
        }
    }

    /// Check the exchange error category, ignoring code and HTTP status
    pub fn is(&self, code: ApiErrorCode) -> bool {
        self.response_error().is_some_and(|err| err.is(code))
    }

    /// Check if this error indicates rate limiting
    pub fn is_rate_limited(&self) -> bool {
        self.response_error().is_some_and(ResponseError::is_rate_limit)
    }

    /// Check if the caller's input was rejected locally
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter(_))
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
