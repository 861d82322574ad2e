/// Customer creation and stock lookup through their HTTP functions
#[path = "common/mod.rs"]
mod common;

use async_trait::async_trait;
use common::*;
use lambda_http::http::Method;
use samples_api::functions::{StockLogic, create_customer, get_stock};
use samples_core::SampleError;
use samples_core::models::{CustomerCreatedEvent, EventVersion};
use samples_core::services::{EventPublisher, HttpCurrencyConverter, InMemoryPublisher, InMemoryStocks};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const VALID_COMMAND: &str = r#"{"firstName":"Ada","lastName":"Lovelace","address":"12 St James's Square"}"#;

struct FailingPublisher;

#[async_trait]
impl EventPublisher for FailingPublisher {
    async fn publish(&self, _event: &CustomerCreatedEvent) -> Result<(), SampleError> {
        Err(SampleError::Events("bus unavailable".to_string()))
    }
}

#[tokio::test]
async fn test_create_customer_publishes_each_version() {
    for (version, type_name) in [
        (EventVersion::V1, "CustomerCreatedEventV1"),
        (EventVersion::V2, "CustomerCreatedEventV2"),
        (EventVersion::V3, "CustomerCreatedEventV3"),
    ] {
        let publisher = InMemoryPublisher::new();
        let response = create_customer(
            &publisher,
            version,
            request(Method::POST, "/customer", Some(VALID_COMMAND)),
        )
        .await;

        assert_eq!(response.status(), 201);
        let published = publisher.published().await;
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].type_name(), type_name);
        assert!(uuid::Uuid::parse_str(published[0].customer_id()).is_ok());
    }
}

#[tokio::test]
async fn test_create_customer_publisher_failure_is_500() {
    let response = create_customer(
        &FailingPublisher,
        EventVersion::V1,
        request(Method::POST, "/customer", Some(VALID_COMMAND)),
    )
    .await;
    assert_eq!(response.status(), 500);
}

#[tokio::test]
async fn test_create_customer_rejects_garbage() {
    let publisher = InMemoryPublisher::new();
    let response = create_customer(
        &publisher,
        EventVersion::V1,
        request(Method::POST, "/customer", Some("not json")),
    )
    .await;
    assert_eq!(response.status(), 400);
    assert!(publisher.published().await.is_empty());
}

#[tokio::test]
async fn test_create_customer_deadline_is_503() {
    let request = with_deadline(
        request(Method::POST, "/customer", Some(VALID_COMMAND)),
        "req-customer",
        Duration::from_millis(200),
    );

    let response = create_customer(&SlowPublisher, EventVersion::V2, request).await;
    assert_eq!(response.status(), 503);
}

async fn rates_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/latest"))
        .and(query_param("base", "EUR"))
        .and(query_param("symbols", "USD,CAD,AUD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "base": "EUR",
            "rates": {"USD": 1.1, "CAD": 1.5, "AUD": 1.6}
        })))
        .mount(&server)
        .await;
    server
}

fn stock_logic(server: &MockServer) -> StockLogic {
    StockLogic::new(
        Arc::new(InMemoryStocks::new([("AMZN".to_string(), 10.0)])),
        Arc::new(HttpCurrencyConverter::new(server.uri(), "key")),
    )
}

#[tokio::test]
async fn test_get_stock_converts_values() {
    let server = rates_server().await;
    let logic = stock_logic(&server);

    let response = get_stock(
        &logic,
        with_path(request(Method::GET, "/stock/AMZN", None), "StockId", "AMZN"),
    )
    .await;

    assert_eq!(response.status(), 200);
    let body = body_json(&response);
    assert_eq!(body["stockId"], "AMZN");
    let values = body["values"].as_array().unwrap();
    assert_eq!(values.len(), 4);
    assert_eq!(values[0]["currency"], "EUR");
    assert_eq!(values[0]["value"], 10.0);
    assert_eq!(values[2]["currency"], "CAD");
    assert_eq!(values[2]["value"], 15.0);
}

#[tokio::test]
async fn test_get_stock_unknown_is_empty() {
    let server = rates_server().await;
    let logic = stock_logic(&server);

    let response = get_stock(
        &logic,
        with_path(request(Method::GET, "/stock/NOPE", None), "StockId", "NOPE"),
    )
    .await;

    assert_eq!(response.status(), 200);
    assert_eq!(
        body_json(&response),
        serde_json::json!({"stockId": "NOPE", "values": []})
    );
}

#[tokio::test]
async fn test_get_stock_requires_id() {
    let server = rates_server().await;
    let logic = stock_logic(&server);

    let response = get_stock(&logic, request(Method::GET, "/stock", None)).await;
    assert_eq!(response.status(), 400);
    assert_eq!(body_text(&response), "Stock id not found on request");
}
