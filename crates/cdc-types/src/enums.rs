//! Order side, type, time-in-force and status enums

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderSide {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl OrderSide {
    /// Returns the side as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        }
    }

    /// Returns the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order type
///
/// Mandatory parameters per type:
///
/// | Type | Side | Additional mandatory parameters |
/// |---|---|---|
/// | LIMIT | Both | quantity, price |
/// | MARKET | BUY | notional or quantity, mutually exclusive |
/// | MARKET | SELL | quantity |
/// | STOP_LIMIT | Both | price, quantity, trigger_price |
/// | TAKE_PROFIT_LIMIT | Both | price, quantity, trigger_price |
/// | STOP_LOSS | BUY | notional, trigger_price |
/// | STOP_LOSS | SELL | quantity, trigger_price |
/// | TAKE_PROFIT | BUY | notional, trigger_price |
/// | TAKE_PROFIT | SELL | quantity, trigger_price |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    Limit,
    Market,
    StopLoss,
    StopLimit,
    TakeProfit,
    TakeProfitLimit,
}

impl OrderType {
    /// Returns the order type as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Limit => "LIMIT",
            Self::Market => "MARKET",
            Self::StopLoss => "STOP_LOSS",
            Self::StopLimit => "STOP_LIMIT",
            Self::TakeProfit => "TAKE_PROFIT",
            Self::TakeProfitLimit => "TAKE_PROFIT_LIMIT",
        }
    }

    /// Returns true if this order type needs a trigger price
    pub fn is_conditional(&self) -> bool {
        !matches!(self, Self::Limit | Self::Market)
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How long an order stays active before being cancelled (limit orders only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TimeInForce {
    /// Default if unspecified
    #[default]
    #[serde(rename = "GOOD_TILL_CANCEL")]
    GoodTillCancel,
    #[serde(rename = "FILL_OR_KILL")]
    FillOrKill,
    #[serde(rename = "IMMEDIATE_OR_CANCEL")]
    ImmediateOrCancel,
}

impl TimeInForce {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GoodTillCancel => "GOOD_TILL_CANCEL",
            Self::FillOrKill => "FILL_OR_KILL",
            Self::ImmediateOrCancel => "IMMEDIATE_OR_CANCEL",
        }
    }
}

impl fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Execution instruction (limit orders only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecInst {
    PostOnly,
}

impl ExecInst {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PostOnly => "POST_ONLY",
        }
    }
}

impl fmt::Display for ExecInst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current status of an order
///
/// A partially filled order is reported as `Active` with a cumulative
/// quantity greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    Active,
    #[serde(rename = "CANCELED")]
    Cancelled,
    Filled,
    Rejected,
    Expired,
}

impl OrderStatus {
    /// Returns true if the order can no longer change
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Active)
    }
}
