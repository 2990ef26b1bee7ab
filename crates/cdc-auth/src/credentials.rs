//! API credentials for private endpoints
//!
//! # Security
//!
//! The secret key is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use cdc_types::{InvalidParameterError, Params};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::error::{AuthError, AuthResult};
use crate::signature::SignatureRequest;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "CDC_API_KEY";
/// Environment variable holding the secret key
pub const SECRET_KEY_ENV: &str = "CDC_SECRET_KEY";

/// API key and secret for authenticated requests
pub struct Credentials {
    /// API key (public, sent with every private request)
    api_key: String,
    /// Secret key (HMAC key, zeroized on drop)
    secret_key: SecretString,
}

impl Credentials {
    /// Create new credentials
    ///
    /// # Errors
    /// Fails with an [`InvalidParameterError`] if either value is empty.
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> AuthResult<Self> {
        let api_key = api_key.into();
        let secret_key = secret_key.into();

        InvalidParameterError::require_non_empty("api_key", &api_key)?;
        InvalidParameterError::require_non_empty("secret_key", &secret_key)?;

        Ok(Self {
            api_key,
            secret_key: SecretString::from(secret_key),
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `CDC_API_KEY` and `CDC_SECRET_KEY` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(API_KEY_ENV.to_string()))?;
        let secret_key = std::env::var(SECRET_KEY_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(SECRET_KEY_ENV.to_string()))?;

        debug!("Loaded credentials from {} / {}", API_KEY_ENV, SECRET_KEY_ENV);
        Self::new(api_key, secret_key)
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Borrow these credentials into a [`SignatureRequest`]
    pub fn signature_request<'a>(
        &'a self,
        id: i64,
        method: &'a str,
        timestamp: i64,
        params: &'a Params,
    ) -> SignatureRequest<'a> {
        SignatureRequest {
            api_key: &self.api_key,
            secret_key: self.secret_key.expose_secret(),
            id,
            method,
            timestamp,
            params,
        }
    }
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            secret_key: SecretString::from(self.secret_key.expose_secret().to_string()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shown = self
            .api_key
            .char_indices()
            .nth(8)
            .map_or(self.api_key.as_str(), |(idx, _)| &self.api_key[..idx]);

        f.debug_struct("Credentials")
            .field("api_key", &format!("{}...", shown))
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}
