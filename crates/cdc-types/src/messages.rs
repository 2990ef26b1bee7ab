//! Request and response envelopes

use crate::params::Params;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;

// ============================================================================
// Request Envelope
// ============================================================================

/// Outbound request body
///
/// `sig` and `api_key` are left out of the JSON when empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiRequest {
    /// Unique request identifier
    pub id: i64,
    /// Wire method name (e.g. `private/create-order`)
    pub method: String,
    /// Milliseconds since the Unix epoch
    pub nonce: i64,
    /// Request parameters
    pub params: Params,
    /// Hex HMAC-SHA256 signature
    #[serde(rename = "sig", skip_serializing_if = "String::is_empty")]
    pub signature: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub api_key: String,
}

impl ApiRequest {
    /// Create an unsigned request
    pub fn new(id: i64, method: impl Into<String>, nonce: i64, params: Params) -> Self {
        Self {
            id,
            method: method.into(),
            nonce,
            params,
            signature: String::new(),
            api_key: String::new(),
        }
    }

    /// Attach the API key and signature
    pub fn signed(mut self, api_key: impl Into<String>, signature: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self.signature = signature.into();
        self
    }
}

// ============================================================================
// Response Envelope
// ============================================================================

/// Inbound response envelope wrapping every endpoint's `result`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub id: NumberOrString,
    #[serde(default)]
    pub method: String,
    /// Response code (`0` on success); sent as a number or a string
    #[serde(default)]
    pub code: NumberOrString,
    /// Optional human-readable message accompanying an error code
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub result: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Take the result payload if one was sent
    pub fn into_result(self) -> Option<T> {
        self.result
    }
}

/// A JSON value sent either as a number or as a string of digits
///
/// The raw text is kept so a value that fails to parse can be reported
/// verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NumberOrString(String);

impl NumberOrString {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse as a signed 64-bit integer
    pub fn as_i64(&self) -> Result<i64, ParseIntError> {
        self.0.trim().parse()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NumberOrString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for NumberOrString {
    fn from(v: i64) -> Self {
        Self(v.to_string())
    }
}

impl From<&str> for NumberOrString {
    fn from(v: &str) -> Self {
        Self(v.to_string())
    }
}

impl From<String> for NumberOrString {
    fn from(v: String) -> Self {
        Self(v)
    }
}

impl<'de> Deserialize<'de> for NumberOrString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RawVisitor;

        impl<'de> Visitor<'de> for RawVisitor {
            type Value = NumberOrString;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a number or a string")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(NumberOrString(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(NumberOrString(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(NumberOrString(v.to_string()))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(NumberOrString(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(NumberOrString(v))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(NumberOrString::default())
            }
        }

        deserializer.deserialize_any(RawVisitor)
    }
}

/// Deserialize a field sent as either a number or a string into a `String`
///
/// Use with `#[serde(deserialize_with = "cdc_types::string_from_number_or_string")]`.
pub fn string_from_number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    NumberOrString::deserialize(deserializer).map(NumberOrString::into_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_omits_empty_auth_fields() {
        let req = ApiRequest::new(7, "public/get-instruments", 1700000000000, Params::new());
        let json = serde_json::to_value(&req).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "method": "public/get-instruments",
                "nonce": 1700000000000i64,
                "params": {}
            })
        );
    }

    #[test]
    fn test_signed_request_fields() {
        let params = Params::new().with("currency", "CRO");
        let req = ApiRequest::new(1234, "private/get-account-summary", 1, params)
            .signed("key", "abcd");
        let json = serde_json::to_value(&req).unwrap();

        assert_eq!(json["sig"], "abcd");
        assert_eq!(json["api_key"], "key");
        assert_eq!(json["params"]["currency"], "CRO");
    }

    #[test]
    fn test_code_as_number_or_string() {
        let numeric: ApiResponse<serde_json::Value> =
            serde_json::from_str(r#"{"id":1,"method":"m","code":10002}"#).unwrap();
        assert_eq!(numeric.code.as_i64(), Ok(10002));

        let string: ApiResponse<serde_json::Value> =
            serde_json::from_str(r#"{"id":"1","method":"m","code":"10002"}"#).unwrap();
        assert_eq!(string.code.as_i64(), Ok(10002));
        assert_eq!(string.id.as_str(), "1");
    }

    #[test]
    fn test_missing_fields_default() {
        let resp: ApiResponse<serde_json::Value> = serde_json::from_str("{}").unwrap();
        assert_eq!(resp.code.as_str(), "");
        assert!(resp.code.as_i64().is_err());
        assert!(resp.result.is_none());
    }

    #[test]
    fn test_malformed_code_kept_verbatim() {
        let resp: ApiResponse<serde_json::Value> =
            serde_json::from_str(r#"{"code":"not-a-number"}"#).unwrap();
        assert_eq!(resp.code.to_string(), "not-a-number");
    }

    #[test]
    fn test_string_from_number_or_string() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(deserialize_with = "string_from_number_or_string")]
            order_id: String,
        }

        let a: Wrapper = serde_json::from_str(r#"{"order_id":1138210129647637539}"#).unwrap();
        let b: Wrapper = serde_json::from_str(r#"{"order_id":"1138210129647637539"}"#).unwrap();
        assert_eq!(a.order_id, b.order_id);
    }
}
