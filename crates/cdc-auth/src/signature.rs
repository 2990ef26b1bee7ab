//! Request signature generation
//!
//! The exchange verifies private requests against
//! `hex(HMAC-SHA256(secret, method + id + api_key + params + nonce))`, where
//! `params` is every key immediately followed by its value, keys in
//! ascending byte order, with no separators anywhere.

use cdc_types::Params;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::fmt::{self, Write as _};

use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

/// Inputs to a single request signature
///
/// The signature is a pure function of these fields.
#[derive(Clone, PartialEq)]
pub struct SignatureRequest<'a> {
    pub api_key: &'a str,
    /// HMAC key, never transmitted
    pub secret_key: &'a str,
    /// Unique request id
    pub id: i64,
    /// Wire method name, e.g. `private/create-order`
    pub method: &'a str,
    /// Milliseconds since the Unix epoch (sent as `nonce`)
    pub timestamp: i64,
    pub params: &'a Params,
}

impl fmt::Debug for SignatureRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignatureRequest")
            .field("api_key", &self.api_key)
            .field("secret_key", &"[REDACTED]")
            .field("id", &self.id)
            .field("method", &self.method)
            .field("timestamp", &self.timestamp)
            .field("params", &self.params)
            .finish()
    }
}

/// Produces request signatures
///
/// The REST client takes this as a trait object so tests can substitute a
/// fixed or failing generator.
pub trait SignatureGenerator: Send + Sync + fmt::Debug {
    /// Sign a request, returning the lowercase hex MAC
    fn generate_signature(&self, req: &SignatureRequest<'_>) -> AuthResult<String>;
}

/// HMAC-SHA256 signer used against the live exchange
#[derive(Debug, Clone, Copy, Default)]
pub struct HmacSignatureGenerator;

impl SignatureGenerator for HmacSignatureGenerator {
    fn generate_signature(&self, req: &SignatureRequest<'_>) -> AuthResult<String> {
        let payload = signature_payload(req);

        let mut mac = HmacSha256::new_from_slice(req.secret_key.as_bytes())
            .map_err(|e| AuthError::Signing(e.to_string()))?;
        mac.update(payload.as_bytes());

        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

/// Concatenate parameters as `key value key value ...` in key order
///
/// Empty parameters contribute an empty string.
pub fn canonical_params(params: &Params) -> String {
    let mut out = String::new();
    for (key, value) in params.iter() {
        out.push_str(key);
        // writing to a String cannot fail
        let _ = write!(out, "{}", value);
    }
    out
}

/// Build the exact byte string that gets signed
pub fn signature_payload(req: &SignatureRequest<'_>) -> String {
    format!(
        "{}{}{}{}{}",
        req.method,
        req.id,
        req.api_key,
        canonical_params(req.params),
        req.timestamp
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn request<'a>(params: &'a Params) -> SignatureRequest<'a> {
        SignatureRequest {
            api_key: "k",
            secret_key: "s",
            id: 1234,
            method: "private/get-account-summary",
            timestamp: 1700000000000,
            params,
        }
    }

    fn sign(req: &SignatureRequest<'_>) -> String {
        HmacSignatureGenerator.generate_signature(req).unwrap()
    }

    #[test]
    fn test_known_signature() {
        let params = Params::new().with("currency", "CRO");
        let req = request(&params);

        assert_eq!(
            signature_payload(&req),
            "private/get-account-summary1234kcurrencyCRO1700000000000"
        );
        assert_eq!(
            sign(&req),
            "c73b97d7e2e6596e30a53458ad99874e0767f2c2d29f969e3c06299f8ff45cae"
        );
    }

    #[test]
    fn test_signature_matches_direct_hmac() {
        let params = Params::new().with("currency", "CRO");

        let mut mac = HmacSha256::new_from_slice(b"s").unwrap();
        mac.update(b"private/get-account-summary1234kcurrencyCRO1700000000000");
        let expected = hex::encode(mac.finalize().into_bytes());

        assert_eq!(sign(&request(&params)), expected);
    }

    #[test]
    fn test_empty_params_contribute_nothing() {
        let params = Params::new();
        let req = request(&params);

        assert_eq!(canonical_params(&params), "");
        assert_eq!(signature_payload(&req), "private/get-account-summary1234k1700000000000");
        assert_eq!(
            sign(&req),
            "8cd68e6155c771122b8d55f76a24ef1cc3c7fadebcd68ac890b49f79d562e337"
        );
    }

    #[test]
    fn test_signing_is_deterministic() {
        let params = Params::new()
            .with("instrument_name", "BTC_USDT")
            .with("price", dec!(50000.5))
            .with("page", 0u32);
        let req = request(&params);

        assert_eq!(sign(&req), sign(&req.clone()));
    }

    #[test]
    fn test_insertion_order_does_not_matter() {
        let mut a = Params::new();
        a.insert("side", "BUY").insert("instrument_name", "ETH_CRO").insert("quantity", dec!(1.5));

        let mut b = Params::new();
        b.insert("quantity", dec!(1.5)).insert("side", "BUY").insert("instrument_name", "ETH_CRO");

        assert_eq!(canonical_params(&a), "instrument_nameETH_CROquantity1.5sideBUY");
        assert_eq!(sign(&request(&a)), sign(&request(&b)));
    }

    #[test]
    fn test_omitted_differs_from_zero() {
        let absent = Params::new().with("page", 0u32);
        let zero = Params::new().with("page", 0u32).with("page_size", 0u32);

        assert_ne!(sign(&request(&absent)), sign(&request(&zero)));

        let empty_str = Params::new().with("page", 0u32).with("instrument_name", "");
        assert_ne!(sign(&request(&absent)), sign(&request(&empty_str)));
    }

    #[test]
    fn test_value_formats_in_payload() {
        let params = Params::new()
            .with("b", true)
            .with("f", 0.25f64)
            .with("i", -3i64)
            .with("p", dec!(100.000));

        assert_eq!(canonical_params(&params), "btruef0.25i-3p100");
    }

    #[test]
    fn test_every_field_affects_signature() {
        let params = Params::new().with("currency", "CRO");
        let base = sign(&request(&params));

        let mut req = request(&params);
        req.id = 1235;
        assert_ne!(sign(&req), base);

        let mut req = request(&params);
        req.timestamp += 1;
        assert_ne!(sign(&req), base);

        let mut req = request(&params);
        req.api_key = "k2";
        assert_ne!(sign(&req), base);

        let mut req = request(&params);
        req.secret_key = "s2";
        assert_ne!(sign(&req), base);

        let mut req = request(&params);
        req.method = "private/get-order-detail";
        assert_ne!(sign(&req), base);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let params = Params::new();
        let mut req = request(&params);
        req.secret_key = "super-secret";
        let debug = format!("{:?}", req);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_signature_is_lowercase_hex() {
        let params = Params::new();
        let sig = sign(&request(&params));
        assert_eq!(sig.len(), 64);
        assert!(sig.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}
