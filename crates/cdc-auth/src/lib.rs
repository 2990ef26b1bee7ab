//! Authentication for the Crypto.com Exchange API
//!
//! Private endpoints carry an HMAC-SHA256 signature over a canonical payload
//! built from the request's method, id, API key, parameters and nonce. This
//! crate holds the credentials and produces that signature.
//!
//! # Example
//!
//! ```no_run
//! use cdc_auth::{Credentials, HmacSignatureGenerator, SignatureGenerator};
//! use cdc_types::Params;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let creds = Credentials::from_env()?;
//! let params = Params::new().with("currency", "CRO");
//!
//! let request = creds.signature_request(1, "private/get-account-summary", 1700000000000, &params);
//! let sig = HmacSignatureGenerator.generate_signature(&request)?;
//! println!("sig: {}", sig);
//! # Ok(())
//! # }
//! ```

mod credentials;
mod error;
mod signature;

pub use credentials::{Credentials, API_KEY_ENV, SECRET_KEY_ENV};
pub use error::{AuthError, AuthResult};
pub use signature::{
    canonical_params, signature_payload, HmacSignatureGenerator, SignatureGenerator,
    SignatureRequest,
};
