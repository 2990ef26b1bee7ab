//! Trading endpoints for order management
//!
//! These endpoints require authentication.

use crate::error::RestResult;
use crate::requester::Requester;
use crate::types::{
    CreateOrderRequest, CreateOrderResult, GetOpenOrdersRequest, GetOpenOrdersResult,
    GetOrderDetailResult, GetOrderHistoryRequest, GetOrderHistoryResult, GetTradesRequest,
    GetTradesResult, Trade,
};
use cdc_auth::Credentials;
use cdc_types::{InvalidParameterError, Params};
use tracing::{debug, info, instrument};

const METHOD_CREATE_ORDER: &str = "private/create-order";
const METHOD_CANCEL_ORDER: &str = "private/cancel-order";
const METHOD_CANCEL_ALL_ORDERS: &str = "private/cancel-all-orders";
const METHOD_GET_ORDER_HISTORY: &str = "private/get-order-history";
const METHOD_GET_OPEN_ORDERS: &str = "private/get-open-orders";
const METHOD_GET_ORDER_DETAIL: &str = "private/get-order-detail";
const METHOD_GET_TRADES: &str = "private/get-trades";

/// Trading endpoints for order management
pub struct TradingEndpoints<'a> {
    requester: &'a Requester,
    credentials: &'a Credentials,
}

impl<'a> TradingEndpoints<'a> {
    pub fn new(requester: &'a Requester, credentials: &'a Credentials) -> Self {
        Self {
            requester,
            credentials,
        }
    }

    /// Place a new order
    ///
    /// Fields left as `None` are not sent; the exchange reports any that
    /// the order type needs.
    #[instrument(skip(self, req), fields(instrument = ?req.instrument_name, side = ?req.side, order_type = ?req.order_type))]
    pub async fn create_order(&self, req: &CreateOrderRequest) -> RestResult<CreateOrderResult> {
        let result: CreateOrderResult = self
            .requester
            .post(self.credentials, METHOD_CREATE_ORDER, req.to_params())
            .await?;

        info!(order_id = %result.order_id, "Order created");
        Ok(result)
    }

    /// Cancel an order
    ///
    /// # Arguments
    /// * `instrument_name` - Instrument the order was placed on
    /// * `order_id` - Exchange order id
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, instrument_name: &str, order_id: &str) -> RestResult<()> {
        InvalidParameterError::require_non_empty("instrument_name", instrument_name)?;
        InvalidParameterError::require_non_empty("order_id", order_id)?;

        let params = Params::new()
            .with("instrument_name", instrument_name)
            .with("order_id", order_id);

        self.requester
            .post_ack(self.credentials, METHOD_CANCEL_ORDER, params)
            .await?;

        debug!("Cancel requested for order {}", order_id);
        Ok(())
    }

    /// Cancel every open order on an instrument
    #[instrument(skip(self))]
    pub async fn cancel_all_orders(&self, instrument_name: &str) -> RestResult<()> {
        InvalidParameterError::require_non_empty("instrument_name", instrument_name)?;

        let params = Params::new().with("instrument_name", instrument_name);

        self.requester
            .post_ack(self.credentials, METHOD_CANCEL_ALL_ORDERS, params)
            .await
    }

    /// Get historical orders
    #[instrument(skip(self))]
    pub async fn get_order_history(
        &self,
        req: &GetOrderHistoryRequest,
    ) -> RestResult<GetOrderHistoryResult> {
        req.validate()?;

        let result: GetOrderHistoryResult = self
            .requester
            .post(self.credentials, METHOD_GET_ORDER_HISTORY, req.to_params())
            .await?;

        debug!("Fetched {} historical orders", result.order_list.len());
        Ok(result)
    }

    /// Get open orders
    #[instrument(skip(self))]
    pub async fn get_open_orders(
        &self,
        req: &GetOpenOrdersRequest,
    ) -> RestResult<GetOpenOrdersResult> {
        req.validate()?;

        let result: GetOpenOrdersResult = self
            .requester
            .post(self.credentials, METHOD_GET_OPEN_ORDERS, req.to_params())
            .await?;

        debug!(
            "Fetched {} of {} open orders",
            result.order_list.len(),
            result.count
        );
        Ok(result)
    }

    /// Get an order with its fills
    #[instrument(skip(self))]
    pub async fn get_order_detail(&self, order_id: &str) -> RestResult<GetOrderDetailResult> {
        InvalidParameterError::require_non_empty("order_id", order_id)?;

        let params = Params::new().with("order_id", order_id);

        self.requester
            .post(self.credentials, METHOD_GET_ORDER_DETAIL, params)
            .await
    }

    /// Get fills
    #[instrument(skip(self))]
    pub async fn get_trades(&self, req: &GetTradesRequest) -> RestResult<Vec<Trade>> {
        req.validate()?;

        let result: GetTradesResult = self
            .requester
            .post(self.credentials, METHOD_GET_TRADES, req.to_params())
            .await?;

        debug!("Fetched {} trades", result.trade_list.len());
        Ok(result.trade_list)
    }
}
