//! Public market data endpoints
//!
//! These endpoints don't require authentication.

use crate::error::RestResult;
use crate::requester::Requester;
use crate::types::{BookResult, Instrument, InstrumentsResult, Ticker, TickerResult};
use cdc_types::{InvalidParameterError, Params};
use tracing::{debug, instrument};

const METHOD_GET_INSTRUMENTS: &str = "public/get-instruments";
const METHOD_GET_TICKER: &str = "public/get-ticker";
const METHOD_GET_BOOK: &str = "public/get-book";

/// Public market data endpoints
pub struct MarketEndpoints<'a> {
    requester: &'a Requester,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(requester: &'a Requester) -> Self {
        Self { requester }
    }

    /// List all tradable instruments
    #[instrument(skip(self))]
    pub async fn get_instruments(&self) -> RestResult<Vec<Instrument>> {
        let result: InstrumentsResult = self
            .requester
            .get(METHOD_GET_INSTRUMENTS, &Params::new())
            .await?;

        debug!("Fetched {} instruments", result.instruments.len());
        Ok(result.instruments)
    }

    /// Get tickers
    ///
    /// # Arguments
    /// * `instrument` - Instrument name; `None` (or empty) returns every ticker
    #[instrument(skip(self))]
    pub async fn get_tickers(&self, instrument: Option<&str>) -> RestResult<Vec<Ticker>> {
        let mut params = Params::new();
        params.insert_opt("instrument_name", instrument.filter(|name| !name.is_empty()));

        let result: TickerResult = self.requester.get(METHOD_GET_TICKER, &params).await?;
        let tickers = result.data.into_vec();

        debug!("Fetched {} tickers", tickers.len());
        Ok(tickers)
    }

    /// Get orderbook snapshot
    ///
    /// # Arguments
    /// * `instrument` - Instrument name (e.g., "BTC_USDT")
    /// * `depth` - Number of levels per side
    #[instrument(skip(self))]
    pub async fn get_book(&self, instrument: &str, depth: Option<u32>) -> RestResult<BookResult> {
        InvalidParameterError::require_non_empty("instrument_name", instrument)?;

        let mut params = Params::new();
        params
            .insert("instrument_name", instrument)
            .insert_opt("depth", depth);

        self.requester.get(METHOD_GET_BOOK, &params).await
    }
}
