//! HTTP-level tests for the gateway client against a mock server.

use g2a_core::{GatewayError, LineItem};
use g2a_gateway::{Checkout, Environment, GatewayClient, GatewayConfig};
use reqwest::Method;
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> GatewayClient {
    let config = GatewayConfig::new("abc123", "s3cr3t", "merchant@example.com", Environment::Test)
        .with_checkout_base_url(server.uri())
        .with_rest_base_url(server.uri());
    GatewayClient::new(config)
}

fn test_checkout() -> Checkout {
    Checkout::new(1001)
        .with_success_url("https://shop.example/ok")
        .with_failure_url("https://shop.example/fail")
        .with_item(LineItem::new("Gift card", 19.99, 1))
}

#[tokio::test]
async fn quote_success_returns_redirect_url() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/index/createQuote"))
        .and(body_string_contains("order_id=1001"))
        .and(body_string_contains(
            // sha256("100119.99EURs3cr3t")
            "hash=f39f765bd70224caf5060a6562686f7963e1afbb9d70128faffc48eee043025a",
        ))
        .and(body_string_contains("items%5B0%5D%5Bqty%5D=1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "abc123" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let mut checkout = test_checkout();

    let url = client.redirect_url(&mut checkout).await.unwrap();

    assert_eq!(url, format!("{}/index/gateway?token=abc123", server.uri()));
    assert_eq!(checkout.redirect_url(), Some(url.as_str()));
}

#[tokio::test]
async fn second_call_reads_memoized_url() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/index/createQuote"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "tok-1" })))
        .expect(1) // a second network call would fail verification
        .mount(&server)
        .await;

    let client = test_client(&server);
    let mut checkout = test_checkout();

    let first = client.redirect_url(&mut checkout).await.unwrap();
    let second = client.redirect_url(&mut checkout).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn email_is_sent_only_when_set() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/index/createQuote"))
        .and(body_string_contains("email=buyer%40example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "tok-2" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let mut checkout = test_checkout().with_email("buyer@example.com");

    client.redirect_url(&mut checkout).await.unwrap();
}

#[tokio::test]
async fn null_token_is_a_quote_error_with_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/index/createQuote"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": null })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let mut checkout = test_checkout();

    let err = client.redirect_url(&mut checkout).await.unwrap_err();

    match err {
        GatewayError::InvalidQuoteResponse { body } => assert!(body.contains("null")),
        other => panic!("expected InvalidQuoteResponse, got {:?}", other),
    }
    assert!(checkout.redirect_url().is_none());
}

#[tokio::test]
async fn empty_cart_is_rejected_before_any_request() {
    let server = MockServer::start().await;
    // No mock mounted: a request would come back 404 as a Network error
    let client = test_client(&server);
    let mut checkout = Checkout::new(1)
        .with_success_url("https://shop.example/ok")
        .with_failure_url("https://shop.example/fail");

    let err = client.redirect_url(&mut checkout).await.unwrap_err();
    assert!(matches!(err, GatewayError::InvalidRequest(_)));
}

#[tokio::test]
async fn transaction_details_sends_authorization_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/transactions/tx-1"))
        .and(header(
            "Authorization",
            // sha256("abc123merchant@example.coms3cr3t")
            "abc123; 95f1e931287589f19fde70769db6c79c60b4aa33b304c359a8bda61da08ccd57",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "transactionId": "tx-1",
            "status": "complete",
            "amount": 19.99
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let details = client.transaction_details("tx-1").await.unwrap();

    assert_eq!(details["status"], "complete");
}

#[tokio::test]
async fn authorized_post_sends_form_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/transactions/tx-1/refund"))
        .and(body_string_contains("amount=19.99"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let fields = vec![("amount".to_string(), "19.99".to_string())];
    let result = client
        .authorized_request(Method::POST, "/transactions/tx-1/refund", &fields)
        .await
        .unwrap();

    assert_eq!(result["status"], "ok");
}

#[tokio::test]
async fn rest_error_status_maps_to_network_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/transactions/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.transaction_details("missing").await.unwrap_err();

    assert!(matches!(err, GatewayError::Network(_)));
    assert!(err.is_retryable());
}
