//! Main REST client implementation

use crate::clock::{Clock, SystemClock};
use crate::endpoints::{AccountEndpoints, MarketEndpoints, TradingEndpoints};
use crate::error::{RestError, RestResult};
use crate::id::{IdGenerator, RandomIdGenerator};
use crate::requester::Requester;
use crate::types::{
    Account, BookResult, CreateOrderRequest, CreateOrderResult, GetOpenOrdersRequest,
    GetOpenOrdersResult, GetOrderDetailResult, GetOrderHistoryRequest, GetOrderHistoryResult,
    GetTradesRequest, Instrument, Ticker, Trade,
};
use cdc_auth::{Credentials, HmacSignatureGenerator, SignatureGenerator};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const DEFAULT_USER_AGENT: &str = concat!("cdc-rest/", env!("CARGO_PKG_VERSION"));

/// Exchange deployment to talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Live exchange
    #[default]
    Production,
    /// UAT sandbox
    UatSandbox,
}

impl Environment {
    /// REST base URL, with trailing slash
    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Production => "https://api.crypto.com/v2/",
            Self::UatSandbox => "https://uat-api.3ona.co/v2/",
        }
    }
}

/// Crypto.com Exchange REST API client
///
/// Provides access to both public and private endpoints.
///
/// # Example
///
/// ```no_run
/// use cdc_rest::{CdcRestClient, Credentials};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = CdcRestClient::new()?;
///     let tickers = client.get_tickers(Some("BTC_USDT")).await?;
///
///     // With authentication for private endpoints
///     let creds = Credentials::from_env()?;
///     let auth_client = CdcRestClient::with_credentials(creds)?;
///     let accounts = auth_client.get_account_summary(None).await?;
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct CdcRestClient {
    requester: Requester,
    credentials: Option<Credentials>,
}

impl CdcRestClient {
    /// Create a new client without authentication
    ///
    /// Only public endpoints will be available.
    pub fn new() -> RestResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    ///
    /// All endpoints (public and private) will be available.
    pub fn with_credentials(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(ClientConfig::default().with_credentials(credentials))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        let http_client = match config.http_client {
            Some(client) => client,
            None => Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .user_agent(config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT))
                .build()?,
        };

        let base_url = match config.base_url {
            Some(mut url) => {
                if !url.ends_with('/') {
                    url.push('/');
                }
                url
            }
            None => config.environment.base_url().to_string(),
        };

        info!(base_url = %base_url, "Created Crypto.com REST client");

        Ok(Self {
            requester: Requester::new(
                http_client,
                base_url,
                config.clock,
                config.id_generator,
                config.signature_generator,
            ),
            credentials: config.credentials,
        })
    }

    /// Check if the client has credentials for private endpoints
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Replace the credentials used for private endpoints
    pub fn update_credentials(&mut self, credentials: Credentials) {
        info!("Updated client credentials");
        self.credentials = Some(credentials);
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        self.requester.base_url()
    }

    fn credentials(&self) -> RestResult<&Credentials> {
        self.credentials.as_ref().ok_or(RestError::AuthRequired)
    }

    // ========================================================================
    // Public Market Endpoints
    // ========================================================================

    /// Get market endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(&self.requester)
    }

    /// List all tradable instruments
    pub async fn get_instruments(&self) -> RestResult<Vec<Instrument>> {
        self.market().get_instruments().await
    }

    /// Get tickers for every instrument, or for one
    pub async fn get_tickers(&self, instrument: Option<&str>) -> RestResult<Vec<Ticker>> {
        self.market().get_tickers(instrument).await
    }

    /// Get the orderbook for an instrument
    ///
    /// # Arguments
    /// * `instrument` - Instrument name (e.g., "BTC_USDT")
    /// * `depth` - Number of price levels
    pub async fn get_book(&self, instrument: &str, depth: Option<u32>) -> RestResult<BookResult> {
        self.market().get_book(instrument, depth).await
    }

    // ========================================================================
    // Private Account Endpoints
    // ========================================================================

    /// Get account endpoints (requires credentials)
    pub fn account(&self) -> RestResult<AccountEndpoints<'_>> {
        Ok(AccountEndpoints::new(&self.requester, self.credentials()?))
    }

    /// Get balances for all currencies, or for one
    pub async fn get_account_summary(&self, currency: Option<&str>) -> RestResult<Vec<Account>> {
        self.account()?.get_account_summary(currency).await
    }

    // ========================================================================
    // Private Trading Endpoints
    // ========================================================================

    /// Get trading endpoints (requires credentials)
    pub fn trading(&self) -> RestResult<TradingEndpoints<'_>> {
        Ok(TradingEndpoints::new(&self.requester, self.credentials()?))
    }

    /// Place a new order
    pub async fn create_order(&self, req: &CreateOrderRequest) -> RestResult<CreateOrderResult> {
        self.trading()?.create_order(req).await
    }

    /// Cancel an order
    pub async fn cancel_order(&self, instrument_name: &str, order_id: &str) -> RestResult<()> {
        self.trading()?.cancel_order(instrument_name, order_id).await
    }

    /// Cancel all open orders for an instrument
    pub async fn cancel_all_orders(&self, instrument_name: &str) -> RestResult<()> {
        self.trading()?.cancel_all_orders(instrument_name).await
    }

    /// Get historical orders
    pub async fn get_order_history(
        &self,
        req: &GetOrderHistoryRequest,
    ) -> RestResult<GetOrderHistoryResult> {
        self.trading()?.get_order_history(req).await
    }

    /// Get open orders
    pub async fn get_open_orders(
        &self,
        req: &GetOpenOrdersRequest,
    ) -> RestResult<GetOpenOrdersResult> {
        self.trading()?.get_open_orders(req).await
    }

    /// Get an order and its fills
    pub async fn get_order_detail(&self, order_id: &str) -> RestResult<GetOrderDetailResult> {
        self.trading()?.get_order_detail(order_id).await
    }

    /// Get fills
    pub async fn get_trades(&self, req: &GetTradesRequest) -> RestResult<Vec<Trade>> {
        self.trading()?.get_trades(req).await
    }
}

impl std::fmt::Debug for CdcRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CdcRestClient")
            .field("base_url", &self.base_url())
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    pub environment: Environment,
    /// Overrides the environment's base URL
    pub base_url: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
    pub clock: Arc<dyn Clock>,
    pub id_generator: Arc<dyn IdGenerator>,
    pub signature_generator: Arc<dyn SignatureGenerator>,
    /// Prebuilt HTTP client; timeout and user agent are then ignored
    pub http_client: Option<Client>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            environment: Environment::default(),
            base_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
            clock: Arc::new(SystemClock),
            id_generator: Arc::new(RandomIdGenerator),
            signature_generator: Arc::new(HmacSignatureGenerator),
            http_client: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Select the exchange environment
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Send requests to a custom base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn with_id_generator(mut self, id_generator: impl IdGenerator + 'static) -> Self {
        self.id_generator = Arc::new(id_generator);
        self
    }

    pub fn with_signature_generator(
        mut self,
        signature_generator: impl SignatureGenerator + 'static,
    ) -> Self {
        self.signature_generator = Arc::new(signature_generator);
        self
    }

    /// Use a prebuilt HTTP client
    pub fn with_http_client(mut self, http_client: Client) -> Self {
        self.http_client = Some(http_client);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_without_credentials() {
        let client = CdcRestClient::new().unwrap();
        assert!(!client.has_credentials());
        assert_eq!(client.base_url(), "https://api.crypto.com/v2/");
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new()
            .with_environment(Environment::UatSandbox)
            .with_timeout(60)
            .with_user_agent("test-agent");

        assert_eq!(config.environment, Environment::UatSandbox);
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.user_agent, Some("test-agent".to_string()));
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.timeout_secs, 30);
        assert!(config.credentials.is_none());
    }

    #[test]
    fn test_environment_urls() {
        let client =
            CdcRestClient::with_config(ClientConfig::new().with_environment(Environment::UatSandbox))
                .unwrap();
        assert_eq!(client.base_url(), "https://uat-api.3ona.co/v2/");
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let client =
            CdcRestClient::with_config(ClientConfig::new().with_base_url("http://localhost:8080/v2"))
                .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/v2/");
    }

    #[test]
    fn test_auth_required_error() {
        let client = CdcRestClient::new().unwrap();
        assert!(matches!(client.account(), Err(RestError::AuthRequired)));
        assert!(matches!(client.trading(), Err(RestError::AuthRequired)));
    }

    #[test]
    fn test_update_credentials() {
        let mut client = CdcRestClient::new().unwrap();
        client.update_credentials(Credentials::new("key", "secret").unwrap());
        assert!(client.has_credentials());
        assert!(client.account().is_ok());
    }

    #[test]
    fn test_debug_hides_credentials() {
        let client =
            CdcRestClient::with_credentials(Credentials::new("key", "super-secret").unwrap())
                .unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("has_credentials: true"));
    }
}
