//! Request dispatch for signed and public calls
//!
//! Signed requests go to the private base URL with the body serialized once;
//! those exact bytes are both signed and transmitted.

use crate::error::{RestError, RestResult};
use crate::transport::{Transport, TransportRequest, TransportResponse};
use bitfinex_auth::{Credentials, RequestSigner};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Body sent when a signed call has no data
const EMPTY_BODY: &[u8] = b"{}";

/// Header carrying the request nonce
pub const NONCE_HEADER: &str = "bfx-nonce";
/// Header carrying the API key
pub const API_KEY_HEADER: &str = "bfx-apikey";
/// Header carrying the hex signature
pub const SIGNATURE_HEADER: &str = "bfx-signature";

/// Sends signed and public requests through a [`Transport`]
#[derive(Debug, Clone)]
pub struct Dispatcher {
    transport: Arc<dyn Transport>,
    credentials: Option<Credentials>,
    private_url: String,
    public_url: String,
}

impl Dispatcher {
    /// Create a dispatcher
    ///
    /// Both base URLs are expected to end with `/`; paths are appended as-is.
    pub fn new(
        transport: Arc<dyn Transport>,
        credentials: Option<Credentials>,
        private_url: impl Into<String>,
        public_url: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            credentials,
            private_url: private_url.into(),
            public_url: public_url.into(),
        }
    }

    /// Credentials used for signed calls, if any
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Base URL for signed calls
    pub fn private_url(&self) -> &str {
        &self.private_url
    }

    /// Base URL for public calls
    pub fn public_url(&self) -> &str {
        &self.public_url
    }

    /// Make a signed request
    ///
    /// `data` is serialized to JSON (`{}` when absent), signed together with
    /// a fresh nonce and sent to `private_url + path` with `params` as query.
    ///
    /// # Errors
    /// - [`RestError::AuthRequired`] without credentials; nothing is sent
    /// - [`RestError::Api`] on a non-2xx status
    /// - [`RestError::Decode`] if the response is not JSON
    /// - transport errors from the underlying [`Transport`]
    pub async fn call<B>(
        &self,
        method: Method,
        path: &str,
        data: Option<&B>,
        params: Option<&[(&str, String)]>,
    ) -> RestResult<Value>
    where
        B: Serialize + ?Sized,
    {
        let credentials = self.credentials.as_ref().ok_or(RestError::AuthRequired)?;

        let body = match data {
            Some(data) => serde_json::to_vec(data).map_err(RestError::Encode)?,
            None => EMPTY_BODY.to_vec(),
        };

        let signer = RequestSigner::new(credentials, path);
        let signature = signer.sign(&body)?;

        let mut request = TransportRequest::new(method, format!("{}{}", self.private_url, path));
        request.headers = vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            (NONCE_HEADER.to_string(), signer.nonce().to_string()),
            (API_KEY_HEADER.to_string(), signer.api_key().to_string()),
            (SIGNATURE_HEADER.to_string(), signature),
        ];
        if let Some(params) = params {
            request.query = params
                .iter()
                .map(|(key, value)| (key.to_string(), value.clone()))
                .collect();
        }
        request.body = Some(body);

        debug!(
            method = %request.method,
            path,
            nonce = signer.nonce(),
            "Making authenticated request"
        );

        let response = self.transport.send(request).await?;
        decode(path, response)
    }

    /// Make a public request
    ///
    /// No body, no query and no authentication headers, whether or not
    /// credentials are configured.
    pub async fn call_public(&self, method: Method, path: &str) -> RestResult<Value> {
        let request = TransportRequest::new(method, format!("{}{}", self.public_url, path));

        debug!(method = %request.method, path, "Making public request");

        let response = self.transport.send(request).await?;
        decode(path, response)
    }
}

fn decode(path: &str, response: TransportResponse) -> RestResult<Value> {
    debug!(path, status = response.status, "Received response");

    if !response.is_success() {
        return Err(RestError::Api {
            status: response.status,
            body: String::from_utf8_lossy(&response.body).into_owned(),
        });
    }

    serde_json::from_slice(&response.body).map_err(RestError::Decode)
}
