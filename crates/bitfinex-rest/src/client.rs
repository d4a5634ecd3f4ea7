//! Main REST client implementation

use crate::dispatch::Dispatcher;
use crate::endpoints::{AccountEndpoints, FundingEndpoints, MarketEndpoints, TradingEndpoints};
use crate::error::{RestError, RestResult};
use crate::transport::{ReqwestTransport, Transport};
use crate::types::{MovementsQuery, Price};
use bitfinex_auth::{AuthError, Credentials};
use rust_decimal::Decimal;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Default base URL for authenticated endpoints
pub const DEFAULT_PRIVATE_URL: &str = "https://api.bitfinex.com/";

/// Default base URL for public endpoints
pub const DEFAULT_PUBLIC_URL: &str = "https://api-pub.bitfinex.com/";

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default user agent
const DEFAULT_USER_AGENT: &str = concat!("bitfinex-rest/", env!("CARGO_PKG_VERSION"));

/// Bitfinex REST API client
///
/// Provides access to both public and private endpoints. Each method sends
/// exactly one request; nothing is cached or retried.
///
/// # Example
///
/// ```no_run
/// use bitfinex_rest::{BitfinexRestClient, Credentials, MovementsQuery};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = BitfinexRestClient::new()?;
///     let candles = client.candles(None, Some("last")).await?;
///
///     // With authentication for private endpoints
///     let creds = Credentials::from_env()?;
///     let auth_client = BitfinexRestClient::with_credentials(creds)?;
///     let history = auth_client
///         .movements(Some("ETH"), MovementsQuery::new().limit(25))
///         .await?;
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BitfinexRestClient {
    dispatcher: Dispatcher,
}

impl BitfinexRestClient {
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
        Self::with_config(ClientConfig::new().with_credentials(credentials))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        let user_agent = config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
        let transport = ReqwestTransport::new(Duration::from_secs(config.timeout_secs), user_agent)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client that sends requests through a custom [`Transport`]
    ///
    /// `timeout_secs` and `user_agent` in `config` are left to the transport.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        info!(
            private_url = %config.private_url,
            public_url = %config.public_url,
            authenticated = config.credentials.is_some(),
            "Created Bitfinex REST client"
        );

        Self {
            dispatcher: Dispatcher::new(
                transport,
                config.credentials,
                config.private_url,
                config.public_url,
            ),
        }
    }

    /// Check if the client has credentials for private endpoints
    pub fn has_credentials(&self) -> bool {
        self.dispatcher.credentials().is_some()
    }

    /// Access the underlying dispatcher for routes without a wrapper
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    // ========================================================================
    // Market Endpoints
    // ========================================================================

    /// Get market endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(&self.dispatcher)
    }

    /// Get candles (public)
    ///
    /// # Arguments
    /// * `candle` - Candle key (e.g., "trade:1m:tETHUSD"), defaults to `trade:1W:tBTCUSD`
    /// * `section` - `hist` or `last`, defaults to `hist`
    pub async fn candles(&self, candle: Option<&str>, section: Option<&str>) -> RestResult<Value> {
        self.market().candles(candle, section).await
    }

    /// Get sell/buy price for a legacy ticker (signed)
    ///
    /// # Arguments
    /// * `ticket` - Ticker symbol (e.g., "ethusd"), defaults to `btcusd`
    pub async fn get_price(&self, ticket: Option<&str>) -> RestResult<Price> {
        self.market().get_price(ticket).await
    }

    // ========================================================================
    // Private Account Endpoints
    // ========================================================================

    /// Get account endpoints (requires credentials)
    pub fn account(&self) -> RestResult<AccountEndpoints<'_>> {
        self.require_credentials()?;
        Ok(AccountEndpoints::new(&self.dispatcher))
    }

    /// Get wallet balances
    pub async fn get_wallets(&self) -> RestResult<Value> {
        self.account()?.get_wallets().await
    }

    /// Get deposit/withdrawal movements
    pub async fn movements(&self, currency: Option<&str>, query: MovementsQuery) -> RestResult<Value> {
        self.account()?.movements(currency, query).await
    }

    // ========================================================================
    // Private Funding Endpoints
    // ========================================================================

    /// Get funding endpoints (requires credentials)
    pub fn funding(&self) -> RestResult<FundingEndpoints<'_>> {
        self.require_credentials()?;
        Ok(FundingEndpoints::new(&self.dispatcher))
    }

    /// Get a deposit address
    pub async fn deposit_address(&self, method: Option<&str>, wallet: Option<&str>) -> RestResult<Value> {
        self.funding()?.deposit_address(method, wallet).await
    }

    /// Create a Lightning invoice
    pub async fn create_invoice(&self, amount: Decimal) -> RestResult<Value> {
        self.funding()?.create_invoice(amount).await
    }

    // ========================================================================
    // Private Trading Endpoints
    // ========================================================================

    /// Get trading endpoints (requires credentials)
    pub fn trading(&self) -> RestResult<TradingEndpoints<'_>> {
        self.require_credentials()?;
        Ok(TradingEndpoints::new(&self.dispatcher))
    }

    /// Submit an exchange order
    pub async fn order_submit(&self, symbol: &str, amount: Decimal) -> RestResult<Value> {
        self.trading()?.order_submit(symbol, amount).await
    }

    fn require_credentials(&self) -> RestResult<()> {
        if self.has_credentials() {
            Ok(())
        } else {
            Err(RestError::AuthRequired)
        }
    }
}

impl std::fmt::Debug for BitfinexRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitfinexRestClient")
            .field("private_url", &self.dispatcher.private_url())
            .field("public_url", &self.dispatcher.public_url())
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// Base URL for signed endpoints, ending in `/`
    pub private_url: String,
    /// Base URL for public endpoints, ending in `/`
    pub public_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            private_url: DEFAULT_PRIVATE_URL.to_string(),
            public_url: DEFAULT_PUBLIC_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration with credentials from `BFX_API_KEY` / `BFX_API_SECRET`
    ///
    /// Credentials are attached only when both variables are set.
    pub fn from_env() -> RestResult<Self> {
        let credentials = match Credentials::from_env() {
            Ok(credentials) => Some(credentials),
            Err(AuthError::EnvVarNotSet(_)) => None,
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            credentials,
            ..Self::default()
        })
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the base URL for signed endpoints
    pub fn with_private_url(mut self, url: impl Into<String>) -> Self {
        self.private_url = with_trailing_slash(url.into());
        self
    }

    /// Set the base URL for public endpoints
    pub fn with_public_url(mut self, url: impl Into<String>) -> Self {
        self.public_url = with_trailing_slash(url.into());
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
}

fn with_trailing_slash(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}
