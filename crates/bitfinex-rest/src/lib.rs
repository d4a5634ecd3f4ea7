//! REST API client for the Bitfinex cryptocurrency exchange
//!
//! This crate provides a small REST client covering market data, wallets,
//! deposits, movement history and order submission.
//!
//! # Features
//!
//! - **Market Data**: Candles (public), ticker price (signed legacy route)
//! - **Account**: Wallet balances, deposit/withdrawal movements
//! - **Funding**: Deposit addresses, Lightning invoices
//! - **Trading**: Exchange order submission
//!
//! # Authentication
//!
//! Private endpoints require API credentials. Requests are signed with
//! HMAC-SHA384 over `"/api/" + path + nonce + body` and carry the
//! `bfx-nonce`, `bfx-apikey` and `bfx-signature` headers. Calling a private
//! endpoint without credentials fails with [`RestError::AuthRequired`]
//! before anything is sent.
//!
//! # Example
//!
//! ```no_run
//! use bitfinex_rest::{BitfinexRestClient, ClientConfig, Credentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = BitfinexRestClient::new()?;
//!     let candles = client.candles(Some("trade:1D:tBTCUSD"), None).await?;
//!     println!("Candles: {}", candles);
//!
//!     // Private endpoints (auth required)
//!     let creds = Credentials::from_env()?;
//!     let auth_client = BitfinexRestClient::with_credentials(creds)?;
//!     let wallets = auth_client.get_wallets().await?;
//!     println!("Wallets: {}", wallets);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod dispatch;
pub mod endpoints;
pub mod error;
pub mod transport;
pub mod types;

// Re-export main types
pub use bitfinex_auth::Credentials;
pub use client::{BitfinexRestClient, ClientConfig};
pub use dispatch::Dispatcher;
pub use error::{RestError, RestResult};
pub use transport::{ReqwestTransport, Transport, TransportRequest, TransportResponse};

// Re-export endpoint-specific types
pub use types::{
    DepositAddressRequest, InvoiceRequest, MovementsQuery, OrderSubmitRequest, Price,
};
