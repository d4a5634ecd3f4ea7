//! HTTP transport boundary
//!
//! The dispatcher never talks to reqwest directly. It hands a fully built
//! [`TransportRequest`] to a [`Transport`] and gets back the status code and
//! raw body bytes.

use crate::error::{RestError, RestResult};
use async_trait::async_trait;
use reqwest::{Client, Method};
use std::time::Duration;
use tracing::trace;

/// A request ready to be put on the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL without query string
    pub url: String,
    /// Extra headers, in insertion order
    pub headers: Vec<(String, String)>,
    /// Query parameters
    pub query: Vec<(String, String)>,
    /// Exact body bytes, if any
    pub body: Option<Vec<u8>>,
}

impl TransportRequest {
    /// Create a request with no headers, query or body
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Look up a header value by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response from the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw body bytes
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Check for a 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can deliver a request and return the response
///
/// Implementations must report connection and timeout failures as errors
/// rather than as a response.
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    /// Send one request
    async fn send(&self, request: TransportRequest) -> RestResult<TransportResponse>;
}

/// Default transport backed by a reqwest [`Client`]
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport with the given request timeout and user agent
    pub fn new(timeout: Duration, user_agent: &str) -> RestResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| RestError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Wrap an existing reqwest client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> RestResult<TransportResponse> {
        let TransportRequest {
            method,
            url,
            headers,
            query,
            body,
        } = request;

        let mut builder = self.client.request(method, url.as_str());
        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if !query.is_empty() {
            builder = builder.query(&query);
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(RestError::from_reqwest)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(RestError::from_reqwest)?;

        trace!(status, bytes = body.len(), "Received response from {}", url);

        Ok(TransportResponse {
            status,
            body: body.to_vec(),
        })
    }
}
