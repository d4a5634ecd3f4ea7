//! Private account endpoints
//!
//! These endpoints require authentication.

use crate::dispatch::Dispatcher;
use crate::error::RestResult;
use crate::types::{or_default, MovementsQuery, DEFAULT_MOVEMENTS_CURRENCY};
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, instrument};

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> AccountEndpoints<'a> {
    pub fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Get all wallets with their balances
    #[instrument(skip(self))]
    pub async fn get_wallets(&self) -> RestResult<Value> {
        debug!("Getting wallets");
        self.dispatcher
            .call(Method::POST, "v2/auth/r/wallets", Some(&serde_json::Map::new()), None)
            .await
    }

    /// Get deposit and withdrawal history
    ///
    /// # Arguments
    /// * `currency` - Currency code, defaults to `BTC`
    /// * `query` - Optional start/end/limit filters
    #[instrument(skip(self))]
    pub async fn movements(&self, currency: Option<&str>, query: MovementsQuery) -> RestResult<Value> {
        let currency = or_default(currency, DEFAULT_MOVEMENTS_CURRENCY);
        debug!("Getting {} movements", currency);

        self.dispatcher
            .call(
                Method::POST,
                &format!("v2/auth/r/movements/{}/hist", currency),
                Some(&query),
                None,
            )
            .await
    }
}
