//! Types for Crypto.com Exchange REST requests and responses

use cdc_types::{
    string_from_number_or_string, ExecInst, InvalidParameterError, OrderSide, OrderStatus,
    OrderType, Params, TimeInForce,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::de::IntoDeserializer;
use serde::{Deserialize, Deserializer};

/// Largest page the exchange serves
pub const MAX_PAGE_SIZE: u32 = 200;

fn check_page_size(page_size: Option<u32>) -> Result<(), InvalidParameterError> {
    match page_size {
        Some(size) if size > MAX_PAGE_SIZE => Err(InvalidParameterError::new(
            "page_size",
            format!("cannot be greater than {}", MAX_PAGE_SIZE),
        )),
        _ => Ok(()),
    }
}

/// Treat `Some("")` as an unset filter
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Treat `""` as absent for optional enum fields
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => T::deserialize(s.into_deserializer()).map(Some),
    }
}

fn optional_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let millis: Option<i64> = Option::deserialize(deserializer)?;
    match millis {
        None | Some(0) => Ok(None),
        Some(ms) => DateTime::from_timestamp_millis(ms)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {}", ms))),
    }
}

// ============================================================================
// Market Data Types
// ============================================================================

/// Tradable instrument
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Instrument {
    pub instrument_name: String,
    pub quote_currency: String,
    pub base_currency: String,
    pub price_decimals: u32,
    pub quantity_decimals: u32,
    #[serde(default)]
    pub margin_trading_enabled: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct InstrumentsResult {
    #[serde(default)]
    pub instruments: Vec<Instrument>,
}

/// 24h ticker for an instrument
///
/// Field names follow the exchange's single-letter keys.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Ticker {
    /// Instrument name
    #[serde(rename = "i")]
    pub instrument: String,
    /// Best bid price
    #[serde(rename = "b", default)]
    pub bid_price: Option<Decimal>,
    /// Best ask price
    #[serde(rename = "k", default)]
    pub ask_price: Option<Decimal>,
    /// Latest trade price
    #[serde(rename = "a", default)]
    pub latest_trade_price: Option<Decimal>,
    #[serde(rename = "t", with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    /// 24h traded volume
    #[serde(rename = "v", default)]
    pub volume_24h: Decimal,
    #[serde(rename = "h", default)]
    pub price_high_24h: Option<Decimal>,
    #[serde(rename = "l", default)]
    pub price_low_24h: Option<Decimal>,
    /// 24h price change
    #[serde(rename = "c", default)]
    pub price_change_24h: Decimal,
}

impl Ticker {
    /// Get the mid price (average of bid and ask)
    pub fn mid_price(&self) -> Option<Decimal> {
        Some((self.ask_price? + self.bid_price?) / Decimal::TWO)
    }

    /// Get the bid/ask spread
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.ask_price? - self.bid_price?)
    }
}

/// `data` is an array for all instruments and an object for one
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum TickerData {
    Many(Vec<Ticker>),
    One(Ticker),
}

impl TickerData {
    pub fn into_vec(self) -> Vec<Ticker> {
        match self {
            Self::Many(tickers) => tickers,
            Self::One(ticker) => vec![ticker],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TickerResult {
    pub data: TickerData,
}

/// Orderbook snapshot
///
/// Each level is `[price, quantity, order count]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookResult {
    #[serde(default)]
    pub bids: Vec<Vec<Decimal>>,
    #[serde(default)]
    pub asks: Vec<Vec<Decimal>>,
    #[serde(rename = "t", with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl BookResult {
    /// Get best bid price
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.first().and_then(|level| level.first().copied())
    }

    /// Get best ask price
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.first().and_then(|level| level.first().copied())
    }

    /// Get spread
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.best_ask()? - self.best_bid()?)
    }
}

// ============================================================================
// Account Types
// ============================================================================

/// Balance of one currency
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Account {
    pub currency: String,
    /// Total balance
    #[serde(default)]
    pub balance: Decimal,
    /// Available to trade or withdraw
    #[serde(default)]
    pub available: Decimal,
    /// Held by open orders
    #[serde(default)]
    pub order: Decimal,
    #[serde(default)]
    pub stake: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AccountSummaryResult {
    #[serde(default)]
    pub accounts: Vec<Account>,
}

// ============================================================================
// Trading Types
// ============================================================================

/// Parameters for `private/create-order`
///
/// Every field is optional on the wire; which ones the exchange requires
/// depends on [`OrderType`]. Nothing is checked client-side.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateOrderRequest {
    pub instrument_name: Option<String>,
    pub side: Option<OrderSide>,
    pub order_type: Option<OrderType>,
    pub price: Option<Decimal>,
    pub quantity: Option<Decimal>,
    /// Amount to spend, for market buys
    pub notional: Option<Decimal>,
    /// Caller-chosen order id
    pub client_oid: Option<String>,
    pub time_in_force: Option<TimeInForce>,
    pub exec_inst: Option<ExecInst>,
    /// Trigger for stop-loss and take-profit orders
    pub trigger_price: Option<Decimal>,
}

impl CreateOrderRequest {
    /// Create a limit order
    pub fn limit(
        instrument_name: impl Into<String>,
        side: OrderSide,
        quantity: Decimal,
        price: Decimal,
    ) -> Self {
        Self {
            instrument_name: Some(instrument_name.into()),
            side: Some(side),
            order_type: Some(OrderType::Limit),
            price: Some(price),
            quantity: Some(quantity),
            ..Default::default()
        }
    }

    /// Create a market order for a base quantity
    pub fn market(instrument_name: impl Into<String>, side: OrderSide, quantity: Decimal) -> Self {
        Self {
            instrument_name: Some(instrument_name.into()),
            side: Some(side),
            order_type: Some(OrderType::Market),
            quantity: Some(quantity),
            ..Default::default()
        }
    }

    /// Set client order id
    pub fn with_client_oid(mut self, client_oid: impl Into<String>) -> Self {
        self.client_oid = Some(client_oid.into());
        self
    }

    /// Set time in force
    pub fn with_time_in_force(mut self, tif: TimeInForce) -> Self {
        self.time_in_force = Some(tif);
        self
    }

    /// Make the order maker-only
    pub fn post_only(mut self) -> Self {
        self.exec_inst = Some(ExecInst::PostOnly);
        self
    }

    /// Set trigger price
    pub fn with_trigger_price(mut self, trigger_price: Decimal) -> Self {
        self.trigger_price = Some(trigger_price);
        self
    }

    pub(crate) fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .insert_opt("instrument_name", non_empty(&self.instrument_name))
            .insert_opt("side", self.side)
            .insert_opt("type", self.order_type)
            .insert_opt("price", self.price)
            .insert_opt("quantity", self.quantity)
            .insert_opt("notional", self.notional)
            .insert_opt("client_oid", non_empty(&self.client_oid))
            .insert_opt("time_in_force", self.time_in_force)
            .insert_opt("exec_inst", self.exec_inst)
            .insert_opt("trigger_price", self.trigger_price);
        params
    }
}

/// Acknowledgement of a new order
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateOrderResult {
    #[serde(deserialize_with = "string_from_number_or_string")]
    pub order_id: String,
    #[serde(default)]
    pub client_oid: Option<String>,
}

/// Filter for order and trade history
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetOrderHistoryRequest {
    pub instrument_name: Option<String>,
    /// Inclusive start of the window
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    /// At most [`MAX_PAGE_SIZE`]
    pub page_size: Option<u32>,
    /// Zero-based page, always sent
    pub page: u32,
}

/// `private/get-trades` takes the same filter as order history
pub type GetTradesRequest = GetOrderHistoryRequest;

impl GetOrderHistoryRequest {
    /// Filter by instrument
    pub fn for_instrument(instrument_name: impl Into<String>) -> Self {
        Self {
            instrument_name: Some(instrument_name.into()),
            ..Default::default()
        }
    }

    /// Restrict to a time window
    pub fn between(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    /// Select a page
    pub fn page(mut self, page: u32, page_size: u32) -> Self {
        self.page = page;
        self.page_size = Some(page_size);
        self
    }

    pub(crate) fn validate(&self) -> Result<(), InvalidParameterError> {
        check_page_size(self.page_size)
    }

    pub(crate) fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .insert_opt("instrument_name", non_empty(&self.instrument_name))
            .insert_opt("page_size", self.page_size)
            .insert_opt("start_ts", self.start.map(|t| t.timestamp_millis()))
            .insert_opt("end_ts", self.end.map(|t| t.timestamp_millis()))
            .insert("page", self.page);
        params
    }
}

/// Filter for open orders
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetOpenOrdersRequest {
    pub instrument_name: Option<String>,
    /// At most [`MAX_PAGE_SIZE`]
    pub page_size: Option<u32>,
    /// Zero-based page, always sent
    pub page: u32,
}

impl GetOpenOrdersRequest {
    /// Filter by instrument
    pub fn for_instrument(instrument_name: impl Into<String>) -> Self {
        Self {
            instrument_name: Some(instrument_name.into()),
            ..Default::default()
        }
    }

    /// Select a page
    pub fn page(mut self, page: u32, page_size: u32) -> Self {
        self.page = page;
        self.page_size = Some(page_size);
        self
    }

    pub(crate) fn validate(&self) -> Result<(), InvalidParameterError> {
        check_page_size(self.page_size)
    }

    pub(crate) fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .insert_opt("instrument_name", non_empty(&self.instrument_name))
            .insert_opt("page_size", self.page_size)
            .insert("page", self.page);
        params
    }
}

/// An order as reported by the exchange
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Order {
    pub status: OrderStatus,
    /// Rejection reason, if any; sent as a number or a string
    #[serde(default, deserialize_with = "string_from_number_or_string")]
    pub reason: String,
    pub side: OrderSide,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub quantity: Decimal,
    #[serde(deserialize_with = "string_from_number_or_string")]
    pub order_id: String,
    #[serde(default)]
    pub client_oid: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub create_time: DateTime<Utc>,
    #[serde(default, deserialize_with = "optional_timestamp")]
    pub update_time: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub instrument_name: String,
    #[serde(default)]
    pub cumulative_quantity: Decimal,
    #[serde(default)]
    pub cumulative_value: Decimal,
    #[serde(default)]
    pub avg_price: Decimal,
    #[serde(default)]
    pub fee_currency: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub exec_inst: Option<ExecInst>,
    #[serde(default)]
    pub trigger_price: Option<Decimal>,
}

impl Order {
    /// Quantity still resting on the book
    pub fn remaining_quantity(&self) -> Decimal {
        self.quantity - self.cumulative_quantity
    }

    /// Check if the order can still fill
    pub fn is_open(&self) -> bool {
        !self.status.is_terminal()
    }
}

/// A single fill
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Trade {
    pub side: OrderSide,
    pub instrument_name: String,
    #[serde(default)]
    pub fee: Decimal,
    #[serde(deserialize_with = "string_from_number_or_string")]
    pub trade_id: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub create_time: DateTime<Utc>,
    pub traded_price: Decimal,
    pub traded_quantity: Decimal,
    #[serde(default)]
    pub fee_currency: String,
    #[serde(deserialize_with = "string_from_number_or_string")]
    pub order_id: String,
}

impl Trade {
    /// Price times quantity
    pub fn notional(&self) -> Decimal {
        self.traded_price * self.traded_quantity
    }
}

/// Page of open orders
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GetOpenOrdersResult {
    /// Total open orders across all pages
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub order_list: Vec<Order>,
}

/// Page of historical orders
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GetOrderHistoryResult {
    #[serde(default)]
    pub order_list: Vec<Order>,
}

/// An order with its fills
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GetOrderDetailResult {
    #[serde(default)]
    pub trade_list: Vec<Trade>,
    pub order_info: Order,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GetTradesResult {
    #[serde(default)]
    pub trade_list: Vec<Trade>,
}
