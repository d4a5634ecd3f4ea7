//! Authentication primitives for Bitfinex's authenticated REST endpoints
//!
//! Every private request carries three headers: the API key, a nonce and a
//! signature. The signature is an HMAC-SHA384 (hex encoded) over the payload
//! `"/api/" + path + nonce + body`.
//!
//! # Example
//!
//! ```
//! use bitfinex_auth::{Credentials, RequestSigner};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let creds = Credentials::new("my-key", "my-secret")?;
//! let signer = RequestSigner::new(&creds, "v2/auth/r/wallets");
//!
//! let signature = signer.sign(b"{}")?;
//! assert_eq!(signature.len(), 96);
//! # Ok(())
//! # }
//! ```

mod credentials;
mod error;
mod nonce;

pub use credentials::{Credentials, RequestSigner, API_KEY_ENV, API_SECRET_ENV};
pub use error::{AuthError, AuthResult};
pub use nonce::next_nonce;
