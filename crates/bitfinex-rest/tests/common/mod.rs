//! Common test utilities for bitfinex-rest integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use bitfinex_rest::{
    BitfinexRestClient, ClientConfig, Credentials, RestResult, Transport, TransportRequest,
    TransportResponse,
};
use parking_lot::Mutex;
use std::sync::Arc;
use wiremock::MockServer;

pub const API_KEY: &str = "test-api-key";
pub const API_SECRET: &str = "test-api-secret";

/// Sample `v1/pubticker` response
pub const TICKER_RESPONSE: &str = r#"{
    "mid": "43250.5",
    "bid": "43250.0",
    "ask": "43251.0",
    "last_price": "43250.0",
    "low": "42100.0",
    "high": "43900.0",
    "volume": "1523.4",
    "timestamp": "1704067200.0"
}"#;

/// Sample `v2/auth/r/wallets` response
pub const WALLETS_RESPONSE: &str = r#"[
    ["exchange", "BTC", 0.5, 0, 0.5, null, null],
    ["exchange", "USD", 1500.25, 0, 1500.25, null, null]
]"#;

pub fn credentials() -> Credentials {
    Credentials::new(API_KEY, API_SECRET).expect("valid test credentials")
}

/// Start a mock server
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointing both base URLs at the mock server
pub fn client_for(server: &MockServer, signed: bool) -> BitfinexRestClient {
    let mut config = ClientConfig::new()
        .with_private_url(server.uri())
        .with_public_url(server.uri())
        .with_timeout(1);
    if signed {
        config = config.with_credentials(credentials());
    }
    BitfinexRestClient::with_config(config).expect("client should build")
}

/// In-memory transport that records requests and answers `[]`
#[derive(Debug, Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<TransportRequest>>,
}

impl RecordingTransport {
    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: TransportRequest) -> RestResult<TransportResponse> {
        self.requests.lock().push(request);
        Ok(TransportResponse {
            status: 200,
            body: b"[]".to_vec(),
        })
    }
}

/// Signed client over a recording transport
pub fn recording_client() -> (BitfinexRestClient, Arc<RecordingTransport>) {
    let transport = Arc::new(RecordingTransport::default());
    let config = ClientConfig::new().with_credentials(credentials());
    (
        BitfinexRestClient::with_transport(config, transport.clone()),
        transport,
    )
}
