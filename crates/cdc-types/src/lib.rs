//! Shared types for the Crypto.com Exchange REST API
//!
//! This crate provides the wire-level definitions used by the signing and
//! REST crates. It has minimal dependencies and can be used independently.
//!
//! # Key Types
//!
//! - [`Params`], [`ParamValue`] - Request parameters with explicit omission
//! - [`ApiRequest`], [`ApiResponse`] - Request and response envelopes
//! - [`OrderSide`], [`OrderType`], [`TimeInForce`], [`ExecInst`], [`OrderStatus`] - Trading enums
//! - [`ApiErrorCode`] - The exchange's numeric response-code taxonomy
//! - [`ResponseError`], [`check_error_response`] - Error classification
//! - [`InvalidParameterError`] - Caller input validation failures

pub mod enums;
pub mod error;
pub mod error_codes;
pub mod messages;
pub mod params;

// Re-export commonly used types
pub use enums::*;
pub use error::*;
pub use error_codes::*;
pub use messages::*;
pub use params::*;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;
