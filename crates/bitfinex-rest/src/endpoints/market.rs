//! Market data endpoints
//!
//! Candles come from the public API. The price lookup goes through the legacy
//! `v1/pubticker` route on the signed dispatcher, so it needs credentials.

use crate::dispatch::Dispatcher;
use crate::error::RestResult;
use crate::types::{or_default, Price, DEFAULT_CANDLE, DEFAULT_SECTION, DEFAULT_TICKET};
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, instrument};

/// Market data endpoints
pub struct MarketEndpoints<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Get candles
    ///
    /// # Arguments
    /// * `candle` - Candle key, defaults to `trade:1W:tBTCUSD`
    /// * `section` - `hist` or `last`, defaults to `hist`
    #[instrument(skip(self))]
    pub async fn candles(&self, candle: Option<&str>, section: Option<&str>) -> RestResult<Value> {
        let candle = or_default(candle, DEFAULT_CANDLE);
        let section = or_default(section, DEFAULT_SECTION);
        debug!("Fetching {} candles for {}", section, candle);

        self.dispatcher
            .call_public(Method::GET, &format!("v2/candles/{}/{}", candle, section))
            .await
    }

    /// Get the current sell/buy price
    ///
    /// # Arguments
    /// * `ticket` - Legacy ticker symbol, defaults to `btcusd`
    #[instrument(skip(self))]
    pub async fn get_price(&self, ticket: Option<&str>) -> RestResult<Price> {
        let ticket = or_default(ticket, DEFAULT_TICKET);
        debug!("Fetching price for {}", ticket);

        let ticker = self
            .dispatcher
            .call::<Value>(Method::GET, &format!("v1/pubticker/{}", ticket), None, None)
            .await?;

        Price::from_ticker(&ticker)
    }
}
