//! Funding endpoints for deposits
//!
//! These endpoints require authentication.

use crate::dispatch::Dispatcher;
use crate::error::RestResult;
use crate::types::{DepositAddressRequest, InvoiceRequest};
use reqwest::Method;
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::{debug, instrument};

/// Funding endpoints for deposits
pub struct FundingEndpoints<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> FundingEndpoints<'a> {
    pub fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Get a deposit address
    ///
    /// # Arguments
    /// * `method` - Deposit method; empty or missing means `bitcoin`
    /// * `wallet` - Destination wallet, defaults to `exchange`
    #[instrument(skip(self))]
    pub async fn deposit_address(&self, method: Option<&str>, wallet: Option<&str>) -> RestResult<Value> {
        let request = DepositAddressRequest::new(method, wallet);
        debug!("Getting {} deposit address for {} wallet", request.method, request.wallet);
        self.dispatcher
            .call(Method::POST, "v2/auth/w/deposit/address", Some(&request), None)
            .await
    }

    /// Create a Lightning (LNX) invoice into the exchange wallet
    #[instrument(skip(self))]
    pub async fn create_invoice(&self, amount: Decimal) -> RestResult<Value> {
        debug!("Creating invoice for {}", amount);
        self.dispatcher
            .call(
                Method::POST,
                "v2/auth/w/deposit/invoice",
                Some(&InvoiceRequest::new(amount)),
                None,
            )
            .await
    }
}
