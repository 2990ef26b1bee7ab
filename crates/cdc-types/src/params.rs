//! Request parameters
//!
//! Parameters are sent as a JSON object and also fed, in canonical order,
//! into the request signature. An absent parameter and a parameter sent as
//! `0` or `""` sign differently, so optional fields are inserted through
//! [`Params::insert_opt`] and simply left out when `None`.

use crate::enums::{ExecInst, OrderSide, OrderType, TimeInForce};
use rust_decimal::Decimal;
use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use serde_json::value::RawValue;
use std::collections::BTreeMap;
use std::fmt;

/// A scalar parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Int(i64),
    Float(f64),
    Decimal(Decimal),
    Str(String),
    Bool(bool),
}

impl fmt::Display for ParamValue {
    /// The representation used when building the signature payload
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Decimal(v) => write!(f, "{}", v),
            Self::Str(v) => f.write_str(v),
            Self::Bool(v) => write!(f, "{}", v),
        }
    }
}

impl Serialize for ParamValue {
    // Numbers are written from their signed text, so the JSON body carries
    // exactly the value the signature covers.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Int(v) => serializer.serialize_i64(*v),
            Self::Float(v) if !v.is_finite() => Err(S::Error::custom(format!(
                "cannot send non-finite number {}",
                v
            ))),
            Self::Float(_) | Self::Decimal(_) => RawValue::from_string(self.to_string())
                .map_err(S::Error::custom)?
                .serialize(serializer),
            Self::Str(v) => serializer.serialize_str(v),
            Self::Bool(v) => serializer.serialize_bool(*v),
        }
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<u32> for ParamValue {
    fn from(v: u32) -> Self {
        Self::Int(v.into())
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<Decimal> for ParamValue {
    /// Trailing zeros are dropped (`50000.00` signs as `50000`)
    fn from(v: Decimal) -> Self {
        Self::Decimal(v.normalize())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<OrderSide> for ParamValue {
    fn from(v: OrderSide) -> Self {
        Self::Str(v.as_str().to_string())
    }
}

impl From<OrderType> for ParamValue {
    fn from(v: OrderType) -> Self {
        Self::Str(v.as_str().to_string())
    }
}

impl From<TimeInForce> for ParamValue {
    fn from(v: TimeInForce) -> Self {
        Self::Str(v.as_str().to_string())
    }
}

impl From<ExecInst> for ParamValue {
    fn from(v: ExecInst) -> Self {
        Self::Str(v.as_str().to_string())
    }
}

/// Request parameter map with unique keys, iterated in ascending byte order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    /// Create an empty parameter map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter, replacing any previous value for `key`
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Insert a parameter only if a value is present
    pub fn insert_opt<V: Into<ParamValue>>(
        &mut self,
        key: impl Into<String>,
        value: Option<V>,
    ) -> &mut Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate key/value pairs sorted by key (byte-wise)
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Key/value pairs as query-string text, identical to the signed form
    pub fn query_pairs(&self) -> Vec<(&str, String)> {
        self.iter().map(|(k, v)| (k, v.to_string())).collect()
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
