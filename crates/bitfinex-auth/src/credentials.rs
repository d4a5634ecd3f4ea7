//! Authentication credentials for Bitfinex API
//!
//! Implements HMAC-SHA384 signing as required by Bitfinex's authenticated
//! (`v2/auth/...`) endpoints.
//!
//! # Security
//!
//! The API secret is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha384;
use tracing::trace;

use crate::error::{AuthError, AuthResult};
use crate::nonce::next_nonce;

type HmacSha384 = Hmac<Sha384>;

/// Prefix every signed path is rooted at
const SIGNATURE_PATH_PREFIX: &str = "/api/";

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "BFX_API_KEY";

/// Environment variable holding the API secret
pub const API_SECRET_ENV: &str = "BFX_API_SECRET";

/// API credentials for authenticated requests
///
/// Both halves must be non-empty. The secret is zeroized when the
/// credentials are dropped.
pub struct Credentials {
    /// API key (sent in the clear as `bfx-apikey`)
    api_key: String,
    /// API secret, only ever used as the HMAC key
    api_secret: SecretString,
}

impl Credentials {
    /// Create new credentials from an API key and secret
    ///
    /// # Errors
    /// Returns [`AuthError::InvalidCredentials`] if either value is empty.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> AuthResult<Self> {
        let api_key = api_key.into();
        let api_secret = api_secret.into();

        if api_key.is_empty() {
            return Err(AuthError::InvalidCredentials("API key is empty".to_string()));
        }
        if api_secret.is_empty() {
            return Err(AuthError::InvalidCredentials("API secret is empty".to_string()));
        }

        Ok(Self {
            api_key,
            api_secret: SecretString::from(api_secret),
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `BFX_API_KEY` and `BFX_API_SECRET` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(API_KEY_ENV.to_string()))?;
        let api_secret = std::env::var(API_SECRET_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(API_SECRET_ENV.to_string()))?;

        Self::new(api_key, api_secret)
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Sign a request for Bitfinex's API
    ///
    /// Bitfinex signature algorithm:
    /// 1. payload = `"/api/" + path + nonce + body`
    /// 2. HMAC-SHA384(api_secret, payload)
    /// 3. Lowercase hex encode
    ///
    /// # Arguments
    /// * `path` - API route without leading slash (e.g., "v2/auth/r/wallets")
    /// * `nonce` - Decimal nonce sent in the `bfx-nonce` header
    /// * `body` - Exact request body bytes that will be transmitted
    ///
    /// # Errors
    /// Returns [`AuthError::InvalidPayload`] if `body` is not UTF-8 text.
    pub fn sign(&self, path: &str, nonce: &str, body: &[u8]) -> AuthResult<String> {
        let body = std::str::from_utf8(body)?;
        let payload = format!("{SIGNATURE_PATH_PREFIX}{path}{nonce}{body}");

        // HMAC accepts keys of any length, so this never fails
        let mut mac = HmacSha384::new_from_slice(self.api_secret.expose_secret().as_bytes())
            .map_err(|e| AuthError::InvalidCredentials(e.to_string()))?;
        mac.update(payload.as_bytes());

        trace!(path, nonce, "Signed request payload");

        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            api_secret: SecretString::from(self.api_secret.expose_secret().to_owned()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let visible = self
            .api_key
            .char_indices()
            .nth(8)
            .map_or(self.api_key.as_str(), |(idx, _)| &self.api_key[..idx]);

        f.debug_struct("Credentials")
            .field("api_key", &format!("{}...", visible))
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// Request signer for building one authenticated request
///
/// Draws a fresh nonce on construction so the nonce header and the signed
/// payload always agree.
#[derive(Debug)]
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
    path: String,
    nonce: String,
}

impl<'a> RequestSigner<'a> {
    /// Create a new request signer with the next process-wide nonce
    pub fn new(credentials: &'a Credentials, path: impl Into<String>) -> Self {
        Self::with_nonce(credentials, path, next_nonce())
    }

    /// Create a request signer with an explicit nonce
    pub fn with_nonce(credentials: &'a Credentials, path: impl Into<String>, nonce: u64) -> Self {
        Self {
            credentials,
            path: path.into(),
            nonce: nonce.to_string(),
        }
    }

    /// Get the nonce for this request
    pub fn nonce(&self) -> &str {
        &self.nonce
    }

    /// Get the path this signer is bound to
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Sign the request with the given body bytes
    pub fn sign(&self, body: &[u8]) -> AuthResult<String> {
        self.credentials.sign(&self.path, &self.nonce, body)
    }
}
