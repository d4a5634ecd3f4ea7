//! HTTP-level tests for the Bitfinex REST client
//!
//! Requests go through the real reqwest transport to a local wiremock server.

mod common;

use bitfinex_rest::{BitfinexRestClient, ClientConfig, MovementsQuery, RestError};
use common::{client_for, credentials, setup_mock_server, TICKER_RESPONSE, WALLETS_RESPONSE};
use rust_decimal_macros::dec;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, header_exists, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_wallets_signed_request() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/v2/auth/r/wallets"))
        .and(header("content-type", "application/json"))
        .and(header("bfx-apikey", common::API_KEY))
        .and(header_exists("bfx-nonce"))
        .and(header_exists("bfx-signature"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_string(WALLETS_RESPONSE))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, true);
    let wallets = client.get_wallets().await.unwrap();
    assert_eq!(wallets[0][1], json!("BTC"));
    assert_eq!(wallets[1][2], json!(1500.25));
}

#[tokio::test]
async fn test_signature_matches_bytes_on_the_wire() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/v2/auth/w/order/submit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([1704067200000u64, "on-req"])))
        .mount(&server)
        .await;

    let client = client_for(&server, true);
    client.order_submit("tBTCUSD", dec!(-0.25)).await.unwrap();

    let received = server.received_requests().await.unwrap();
    let request = &received[0];
    let nonce = request.headers.get("bfx-nonce").unwrap().to_str().unwrap();
    let signature = request.headers.get("bfx-signature").unwrap().to_str().unwrap();

    let expected = credentials()
        .sign("v2/auth/w/order/submit", nonce, &request.body)
        .unwrap();
    assert_eq!(signature, expected);

    let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
    assert_eq!(
        body,
        json!({"symbol": "tBTCUSD", "amount": "-0.25", "type": "EXCHANGE"})
    );
}

#[tokio::test]
async fn test_movements_filters_on_the_wire() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/v2/auth/r/movements/BTC/hist"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v2/auth/r/movements/USD/hist"))
        .and(body_json(json!({"start": 100})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, true);
    client
        .movements(None, MovementsQuery::from_sentinels(0, 0, 0))
        .await
        .unwrap();
    client
        .movements(Some("USD"), MovementsQuery::from_sentinels(100, 0, 0))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_price() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v1/pubticker/ethusd"))
        .and(header_exists("bfx-signature"))
        .respond_with(ResponseTemplate::new(200).set_body_string(TICKER_RESPONSE))
        .mount(&server)
        .await;

    let client = client_for(&server, true);
    let price = client.get_price(Some("ethusd")).await.unwrap();
    assert_eq!(price.sell_price(), Some(dec!(43251.0)));
    assert_eq!(price.buy_price(), Some(dec!(43250.0)));
}

#[tokio::test]
async fn test_public_candles_carry_no_auth_headers() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/candles/trade:1D:tETHUSD/last"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([1704067200000u64, 2280.1, 2295.4, 2301.0, 2270.2, 10523.7])),
        )
        .mount(&server)
        .await;

    // Signed client on purpose: credentials must not leak into public calls
    let client = client_for(&server, true);
    let candle = client
        .candles(Some("trade:1D:tETHUSD"), Some("last"))
        .await
        .unwrap();
    assert_eq!(candle[2], json!(2295.4));

    let received = server.received_requests().await.unwrap();
    let headers = &received[0].headers;
    assert!(!headers.contains_key("bfx-apikey"));
    assert!(!headers.contains_key("bfx-nonce"));
    assert!(!headers.contains_key("bfx-signature"));
    assert!(received[0].body.is_empty());
}

#[tokio::test]
async fn test_public_candles_without_credentials() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/candles/trade:1W:tBTCUSD/hist"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, false);
    assert_eq!(client.candles(None, None).await.unwrap(), json!([]));
}

#[tokio::test]
async fn test_api_error_status_surfaces() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/v2/auth/w/deposit/address"))
        .respond_with(
            ResponseTemplate::new(500).set_body_string(r#"["error",10100,"apikey: invalid"]"#),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, true);
    let err = client.deposit_address(None, None).await.unwrap_err();
    match err {
        RestError::Api { status, body } => {
            assert_eq!(status, 500);
            assert!(body.contains("apikey: invalid"));
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_json_is_decode_error() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/v2/auth/w/deposit/invoice"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let client = client_for(&server, true);
    let err = client.create_invoice(dec!(0.001)).await.unwrap_err();
    assert!(matches!(err, RestError::Decode(_)));
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/candles/trade:1W:tBTCUSD/hist"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, false);
    let err = client.candles(None, None).await.unwrap_err();
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    let config = ClientConfig::new()
        .with_public_url("http://127.0.0.1:1")
        .with_timeout(2);
    let client = BitfinexRestClient::with_config(config).unwrap();

    let err = client.candles(None, None).await.unwrap_err();
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_missing_credentials_never_hit_the_network() {
    let server = setup_mock_server().await;
    let client = client_for(&server, false);

    assert!(matches!(
        client.order_submit("tBTCUSD", dec!(1)).await,
        Err(RestError::AuthRequired)
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}
