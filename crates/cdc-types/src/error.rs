//! Error types shared by the signing and REST crates

use crate::error_codes::ApiErrorCode;
use crate::messages::NumberOrString;
use thiserror::Error;

/// Caller input rejected before any network activity
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid parameter: {parameter} {reason}")]
pub struct InvalidParameterError {
    /// Name of the offending parameter
    pub parameter: String,
    /// Why it was rejected
    pub reason: String,
}

impl InvalidParameterError {
    pub fn new(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// `<parameter> cannot be empty`
    pub fn empty(parameter: impl Into<String>) -> Self {
        Self::new(parameter, "cannot be empty")
    }

    /// Fail with [`empty`](Self::empty) if `value` is an empty string
    pub fn require_non_empty(parameter: &str, value: &str) -> Result<(), Self> {
        if value.is_empty() {
            Err(Self::empty(parameter))
        } else {
            Ok(())
        }
    }
}

/// What a [`ResponseError`] carries underneath its code and status
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResponseErrorKind {
    /// A code from the exchange's taxonomy (or [`ApiErrorCode::Unexpected`])
    #[error("{0}")]
    Api(ApiErrorCode),

    /// The response code was not an integer
    #[error("invalid response code: {0}")]
    InvalidResponseCode(String),
}

/// An error reported by the exchange
///
/// Compare with `==` for an exact match on code, status and kind, or use
/// [`is`](Self::is) to match on the error category alone.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{code}: {kind}")]
pub struct ResponseError {
    /// Raw exchange response code (`0` when it could not be parsed)
    pub code: i64,
    /// HTTP status of the response
    pub http_status: u16,
    pub kind: ResponseErrorKind,
}

impl ResponseError {
    /// Build the error for a numeric response code
    ///
    /// Returns `None` for code `0`, which always means success.
    pub fn from_code(http_status: u16, code: i64) -> Option<Self> {
        if code == 0 {
            return None;
        }

        Some(Self {
            code,
            http_status,
            kind: ResponseErrorKind::Api(ApiErrorCode::from_code(code)),
        })
    }

    /// Build the error for a response code that failed to parse
    pub fn invalid_code(http_status: u16, raw: impl Into<String>) -> Self {
        Self {
            code: 0,
            http_status,
            kind: ResponseErrorKind::InvalidResponseCode(raw.into()),
        }
    }

    /// The taxonomy entry, if the code parsed
    pub fn api_code(&self) -> Option<ApiErrorCode> {
        match self.kind {
            ResponseErrorKind::Api(code) => Some(code),
            ResponseErrorKind::InvalidResponseCode(_) => None,
        }
    }

    /// Category match, ignoring the numeric code and HTTP status
    pub fn is(&self, code: ApiErrorCode) -> bool {
        self.api_code() == Some(code)
    }

    /// Check if the exchange rejected the request for rate limiting
    pub fn is_rate_limit(&self) -> bool {
        self.api_code().is_some_and(|c| c.is_rate_limit())
    }
}

/// Classify an HTTP status and response code
///
/// A status below 400 is success whatever the code says. Otherwise the code
/// must parse as an integer; `0` is success and anything else is looked up
/// in the taxonomy.
pub fn check_error_response(http_status: u16, code: &NumberOrString) -> Result<(), ResponseError> {
    if http_status < 400 {
        return Ok(());
    }

    let code = code
        .as_i64()
        .map_err(|_| ResponseError::invalid_code(http_status, code.as_str()))?;

    match ResponseError::from_code(http_status, code) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
