//! Types for Bitfinex REST API requests and responses
//!
//! Request bodies are typed structs so each endpoint states exactly which
//! fields it sends and when. Responses are otherwise returned as raw
//! [`serde_json::Value`]s.

use crate::error::{RestError, RestResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default ticker for price lookups
pub const DEFAULT_TICKET: &str = "btcusd";
/// Default candle key (`trade:<timeframe>:<symbol>`)
pub const DEFAULT_CANDLE: &str = "trade:1W:tBTCUSD";
/// Default candle section
pub const DEFAULT_SECTION: &str = "hist";
/// Default deposit method
pub const DEFAULT_DEPOSIT_METHOD: &str = "bitcoin";
/// Default wallet for deposits and invoices
pub const DEFAULT_WALLET: &str = "exchange";
/// Default currency for movement history
pub const DEFAULT_MOVEMENTS_CURRENCY: &str = "BTC";
/// Currency code for Lightning invoices
pub const INVOICE_CURRENCY: &str = "LNX";
/// Order type used by order submission
pub const EXCHANGE_ORDER_TYPE: &str = "EXCHANGE";

/// Use `value` unless it is missing or empty
pub(crate) fn or_default<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => default,
    }
}

// ============================================================================
// Market Data Types
// ============================================================================

/// Best ask/bid from the legacy ticker
///
/// Serializes as `{"SELL": <ask>, "BUY": <bid>}`. Values are passed through
/// exactly as the exchange returned them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    /// Price to sell at (ticker `ask`)
    #[serde(rename = "SELL")]
    pub sell: Value,
    /// Price to buy at (ticker `bid`)
    #[serde(rename = "BUY")]
    pub buy: Value,
}

impl Price {
    /// Extract `ask`/`bid` from a `v1/pubticker` response
    pub fn from_ticker(ticker: &Value) -> RestResult<Self> {
        let field = |name: &str| {
            ticker
                .get(name)
                .cloned()
                .ok_or_else(|| RestError::UnexpectedResponse(format!("ticker missing `{}`", name)))
        };

        Ok(Self {
            sell: field("ask")?,
            buy: field("bid")?,
        })
    }

    /// Sell price as a decimal
    pub fn sell_price(&self) -> Option<Decimal> {
        as_decimal(&self.sell)
    }

    /// Buy price as a decimal
    pub fn buy_price(&self) -> Option<Decimal> {
        as_decimal(&self.buy)
    }

    /// Spread between sell and buy
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.sell_price()? - self.buy_price()?)
    }
}

fn as_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => n.to_string().parse().ok(),
        _ => None,
    }
}

// ============================================================================
// Funding Types
// ============================================================================

/// Body for `v2/auth/w/deposit/address`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepositAddressRequest {
    /// Wallet to deposit into
    pub wallet: String,
    /// Deposit method (e.g. "bitcoin", "ethereum")
    pub method: String,
    /// 1 to request a fresh address, 0 to reuse the current one
    pub op_renew: u8,
}

impl DepositAddressRequest {
    /// Build a request, falling back to `bitcoin` and `exchange`
    ///
    /// An empty `method` or `wallet` counts as missing.
    pub fn new(method: Option<&str>, wallet: Option<&str>) -> Self {
        Self {
            wallet: or_default(wallet, DEFAULT_WALLET).to_string(),
            method: or_default(method, DEFAULT_DEPOSIT_METHOD).to_string(),
            op_renew: 0,
        }
    }
}

impl Default for DepositAddressRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Body for `v2/auth/w/deposit/invoice`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceRequest {
    /// Always `LNX`
    pub currency: &'static str,
    /// Always `exchange`
    pub wallet: &'static str,
    /// Invoice amount
    pub amount: Decimal,
}

impl InvoiceRequest {
    /// Build a Lightning invoice request for `amount`
    pub fn new(amount: Decimal) -> Self {
        Self {
            currency: INVOICE_CURRENCY,
            wallet: DEFAULT_WALLET,
            amount,
        }
    }
}

// ============================================================================
// Account Types
// ============================================================================

/// Filters for `v2/auth/r/movements/{currency}/hist`
///
/// Zero means "not set": a zero `start`, `end` or `limit` is left out of
/// the body entirely rather than sent as `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MovementsQuery {
    /// Millisecond timestamp to start from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u64>,
    /// Millisecond timestamp to end at
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<u64>,
    /// Maximum number of records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl MovementsQuery {
    /// No filters
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from values where 0 means unset
    pub fn from_sentinels(start: u64, end: u64, limit: u32) -> Self {
        Self::new().start(start).end(end).limit(limit)
    }

    /// Set start (0 clears it)
    pub fn start(mut self, start: u64) -> Self {
        self.start = non_zero(start);
        self
    }

    /// Set end (0 clears it)
    pub fn end(mut self, end: u64) -> Self {
        self.end = non_zero(end);
        self
    }

    /// Set limit (0 clears it)
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = non_zero(limit);
        self
    }
}

fn non_zero<T: Default + PartialEq>(value: T) -> Option<T> {
    (value != T::default()).then_some(value)
}

// ============================================================================
// Trading Types
// ============================================================================

/// Body for `v2/auth/w/order/submit`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSubmitRequest {
    /// Trading pair (e.g. "tBTCUSD")
    pub symbol: String,
    /// Positive to buy, negative to sell
    pub amount: Decimal,
    /// Always `EXCHANGE`
    #[serde(rename = "type")]
    pub order_type: &'static str,
}

impl OrderSubmitRequest {
    /// Build an exchange order
    pub fn new(symbol: impl Into<String>, amount: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            amount,
            order_type: EXCHANGE_ORDER_TYPE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_movements_zero_values_omitted() {
        let query = MovementsQuery::from_sentinels(0, 0, 0);
        assert_eq!(serde_json::to_value(query).unwrap(), json!({}));
        assert_eq!(serde_json::to_string(&query).unwrap(), "{}");
    }

    #[test]
    fn test_movements_only_start() {
        let query = MovementsQuery::from_sentinels(100, 0, 0);
        assert_eq!(serde_json::to_value(query).unwrap(), json!({"start": 100}));
    }

    #[test]
    fn test_movements_all_fields() {
        let query = MovementsQuery::new().start(1).end(2).limit(25);
        assert_eq!(
            serde_json::to_value(query).unwrap(),
            json!({"start": 1, "end": 2, "limit": 25})
        );
    }

    #[test]
    fn test_movements_zero_clears_previous_value() {
        let query = MovementsQuery::new().limit(50).limit(0);
        assert_eq!(query.limit, None);
    }

    #[test]
    fn test_deposit_address_defaults() {
        let body = serde_json::to_value(DepositAddressRequest::default()).unwrap();
        assert_eq!(
            body,
            json!({"wallet": "exchange", "method": "bitcoin", "op_renew": 0})
        );
    }

    #[test]
    fn test_deposit_address_empty_method_falls_back() {
        let request = DepositAddressRequest::new(Some(""), Some("margin"));
        assert_eq!(request.method, "bitcoin");
        assert_eq!(request.wallet, "margin");

        let request = DepositAddressRequest::new(Some("ethereum"), None);
        assert_eq!(request.method, "ethereum");
        assert_eq!(request.wallet, "exchange");
    }

    #[test]
    fn test_invoice_body() {
        let body = serde_json::to_value(InvoiceRequest::new(dec!(0.001))).unwrap();
        assert_eq!(
            body,
            json!({"currency": "LNX", "wallet": "exchange", "amount": "0.001"})
        );
    }

    #[test]
    fn test_order_submit_body() {
        let body = serde_json::to_string(&OrderSubmitRequest::new("tBTCUSD", dec!(-0.5))).unwrap();
        assert_eq!(body, r#"{"symbol":"tBTCUSD","amount":"-0.5","type":"EXCHANGE"}"#);
    }

    #[test]
    fn test_price_from_ticker() {
        let ticker = json!({
            "mid": "9087.55",
            "bid": "9087.5",
            "ask": "9087.6",
            "last_price": "9087.6"
        });
        let price = Price::from_ticker(&ticker).unwrap();
        assert_eq!(price.sell, json!("9087.6"));
        assert_eq!(price.buy, json!("9087.5"));
        assert_eq!(price.spread(), Some(dec!(0.1)));
        assert_eq!(
            serde_json::to_value(&price).unwrap(),
            json!({"SELL": "9087.6", "BUY": "9087.5"})
        );
    }

    #[test]
    fn test_price_missing_field() {
        let err = Price::from_ticker(&json!({"bid": "1"})).unwrap_err();
        assert!(matches!(err, RestError::UnexpectedResponse(_)));
    }

    #[test]
    fn test_price_numeric_values() {
        let price = Price::from_ticker(&json!({"ask": 101.5, "bid": 100})).unwrap();
        assert_eq!(price.sell_price(), Some(dec!(101.5)));
        assert_eq!(price.buy_price(), Some(dec!(100)));
    }
}
