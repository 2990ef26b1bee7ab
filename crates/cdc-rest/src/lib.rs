//! REST API client for the Crypto.com Exchange
//!
//! This crate provides a REST client for trading on the Crypto.com Exchange,
//! covering market data, account balances and order management.
//!
//! # Features
//!
//! - **Market Data**: Instruments, tickers, orderbook
//! - **Account**: Balances
//! - **Trading**: Create and cancel orders, open orders, order and trade history
//!
//! # Authentication
//!
//! Private endpoints require API credentials. Each private request is signed
//! with HMAC-SHA256 over the method, request id, API key, sorted parameters
//! and nonce.
//!
//! # Example
//!
//! ```no_run
//! use cdc_rest::{CdcRestClient, Credentials, CreateOrderRequest, OrderSide};
//! use rust_decimal_macros::dec;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = CdcRestClient::new()?;
//!     let book = client.get_book("BTC_USDT", Some(10)).await?;
//!     println!("BTC/USDT spread: {:?}", book.spread());
//!
//!     // Private endpoints (auth required)
//!     let client = CdcRestClient::with_credentials(Credentials::from_env()?)?;
//!     let order = CreateOrderRequest::limit("BTC_USDT", OrderSide::Buy, dec!(0.001), dec!(20000));
//!     let created = client.create_order(&order).await?;
//!     println!("Order id: {}", created.order_id);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Rejections from the exchange surface as [`RestError::Response`] carrying a
//! [`ResponseError`]. Match a category with [`RestError::is`] or compare the
//! whole error for an exact code and HTTP status.

pub mod client;
pub mod clock;
pub mod endpoints;
pub mod error;
pub mod id;
pub mod requester;
pub mod types;

// Re-export main types
pub use client::{CdcRestClient, ClientConfig, Environment};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{RestError, RestResult};
pub use id::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};

pub use cdc_auth::{
    Credentials, HmacSignatureGenerator, SignatureGenerator, SignatureRequest,
};
pub use cdc_types::{
    ApiErrorCode, Decimal, ExecInst, InvalidParameterError, OrderSide, OrderStatus, OrderType,
    ResponseError, ResponseErrorKind, TimeInForce,
};

// Re-export endpoint-specific types
pub use types::{
    // Market data
    BookResult, Instrument, Ticker,
    // Account
    Account,
    // Trading
    CreateOrderRequest, CreateOrderResult, GetOpenOrdersRequest, GetOpenOrdersResult,
    GetOrderDetailResult, GetOrderHistoryRequest, GetOrderHistoryResult, GetTradesRequest, Order,
    Trade, MAX_PAGE_SIZE,
};
