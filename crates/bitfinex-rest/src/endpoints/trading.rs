//! Trading endpoints for order submission
//!
//! These endpoints require authentication.

use crate::dispatch::Dispatcher;
use crate::error::RestResult;
use crate::types::OrderSubmitRequest;
use reqwest::Method;
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::{debug, instrument};

/// Trading endpoints for order submission
pub struct TradingEndpoints<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> TradingEndpoints<'a> {
    pub fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Submit an exchange order
    ///
    /// # Arguments
    /// * `symbol` - Trading pair (e.g., "tBTCUSD")
    /// * `amount` - Positive to buy, negative to sell
    #[instrument(skip(self))]
    pub async fn order_submit(&self, symbol: &str, amount: Decimal) -> RestResult<Value> {
        let order = OrderSubmitRequest::new(symbol, amount);
        debug!("Submitting order {} {}", order.amount, order.symbol);
        self.dispatcher
            .call(Method::POST, "v2/auth/w/order/submit", Some(&order), None)
            .await
    }
}
