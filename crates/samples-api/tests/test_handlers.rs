/// Generic request handler functions end to end through `handle_request`
#[path = "common/mod.rs"]
mod common;

use common::*;
use lambda_http::http::Method;
use samples_api::functions::{GetEmployee, GetHealth, ListBuckets, OnConnect, OnDisconnect, PutEmployee};
use samples_api::handle_request;
use samples_core::models::{Connection, Employee};
use samples_core::services::{InMemoryRepository, InMemoryStorage};
use std::sync::Arc;
use std::time::Duration;

fn employee(id: &str) -> Employee {
    serde_json::from_value(serde_json::json!({
        "employee_id": id,
        "email": "jane@example.com",
        "first_name": "Jane",
        "last_name": "Doe",
        "dob": "1990-04-01",
        "hire_date": "2020-01-15"
    }))
    .unwrap()
}

#[tokio::test]
async fn test_get_employee_found() {
    let repository = Arc::new(InMemoryRepository::with_items([employee("100")]));
    let handler = GetEmployee::new(repository);

    let response = handle_request(
        &handler,
        with_query(request(Method::GET, "/employee", None), "employee_id", "100"),
    )
    .await;

    assert_eq!(response.status(), 200);
    assert_eq!(response.headers()["Access-Control-Allow-Origin"], "*");
    let body = body_json(&response);
    assert_eq!(body["employee"]["employee_id"], "100");
    assert_eq!(body["employee"]["first_name"], "Jane");
}

#[tokio::test]
async fn test_get_employee_errors() {
    let repository = Arc::new(InMemoryRepository::<Employee>::new());
    let handler = GetEmployee::new(repository);

    let response = handle_request(&handler, request(Method::GET, "/employee", None)).await;
    assert_eq!(response.status(), 400);
    assert_eq!(response.headers()["X-Amzn-ErrorType"], "ValidationException");

    let response = handle_request(
        &handler,
        with_query(request(Method::GET, "/employee", None), "employee_id", "404"),
    )
    .await;
    assert_eq!(response.status(), 404);
    assert_eq!(body_json(&response)["errorType"], "NotFoundException");

    let response = handle_request(&handler, request(Method::DELETE, "/employee", None)).await;
    assert_eq!(response.status(), 405);
    assert_eq!(response.headers()["Allow"], "GET");
}

#[tokio::test]
async fn test_put_employee_upsert() {
    let repository = Arc::new(InMemoryRepository::<Employee>::new());
    let handler = PutEmployee::new(repository.clone());
    let body = serde_json::json!({ "employee": employee("200") }).to_string();

    let response = handle_request(&handler, request(Method::PUT, "/employee", Some(body.as_str()))).await;
    assert_eq!(response.status(), 200);
    assert_eq!(body_json(&response)["result"], "Inserted");

    let response = handle_request(&handler, request(Method::PUT, "/employee", Some(body.as_str()))).await;
    assert_eq!(body_json(&response)["result"], "Updated");
    assert_eq!(repository.len().await, 1);
}

#[tokio::test]
async fn test_put_employee_rejects_missing_employee() {
    let handler = PutEmployee::new(Arc::new(InMemoryRepository::<Employee>::new()));

    let response = handle_request(&handler, request(Method::PUT, "/employee", Some("{}"))).await;
    assert_eq!(response.status(), 400);

    let response = handle_request(&handler, request(Method::PUT, "/employee", None)).await;
    assert_eq!(response.status(), 400);
    assert_eq!(body_json(&response)["errorMessage"], "Validation error: No body contents");
}

#[tokio::test]
async fn test_health_reports_request_id() {
    let request = with_deadline(
        request(Method::GET, "/health", None),
        "req-health",
        Duration::from_secs(30),
    );

    let response = handle_request(&GetHealth, request).await;
    assert_eq!(response.status(), 200);
    assert_eq!(body_json(&response)["aws_request_id"], "req-health");
}

#[tokio::test]
async fn test_list_buckets_with_prefix() {
    let handler = ListBuckets::new(Arc::new(InMemoryStorage::with_buckets(&[
        "samples-input",
        "samples-output",
        "other",
    ])));

    let response = handle_request(
        &handler,
        with_query(request(Method::GET, "/storage", None), "prefix", "samples-"),
    )
    .await;

    assert_eq!(response.status(), 200);
    assert_eq!(
        body_json(&response)["storageAreas"],
        serde_json::json!(["samples-input", "samples-output"])
    );
}

#[tokio::test]
async fn test_websocket_connect_and_disconnect() {
    let connections = Arc::new(InMemoryRepository::<Connection>::new());

    let response = handle_request(
        &OnConnect::new(connections.clone()),
        websocket_request("conn-1"),
    )
    .await;
    assert_eq!(response.status(), 200);
    let body = body_json(&response);
    assert_eq!(body["connectionId"], "conn-1");
    assert_eq!(body["result"], "Connected");
    assert!(connections.contains("conn-1").await);

    let response = handle_request(
        &OnDisconnect::new(connections.clone()),
        websocket_request("conn-1"),
    )
    .await;
    assert_eq!(body_json(&response)["result"], "Disconnected");
    assert!(connections.is_empty().await);
}

#[tokio::test]
async fn test_put_employee_rejects_blank_id() {
    let repository = Arc::new(InMemoryRepository::<Employee>::new());
    let handler = PutEmployee::new(repository.clone());
    let body = serde_json::json!({ "employee": employee("  ") }).to_string();

    let response = handle_request(&handler, request(Method::PUT, "/employee", Some(body.as_str()))).await;

    assert_eq!(response.status(), 400);
    assert_eq!(response.headers()["X-Amzn-ErrorType"], "ValidationException");
    assert!(repository.is_empty().await);
}

#[tokio::test]
async fn test_put_employee_deadline_is_503() {
    let body = serde_json::json!({ "employee": employee("300") }).to_string();
    let request = with_deadline(
        request(Method::PUT, "/employee", Some(body.as_str())),
        "req-put",
        Duration::from_millis(200),
    );

    let response = handle_request(&PutEmployee::new(Arc::new(SlowEmployees)), request).await;

    assert_eq!(response.status(), 503);
    assert_eq!(response.headers()["X-Amzn-ErrorType"], "TimeoutException");
    assert_eq!(body_json(&response)["requestId"], "req-put");
}

#[tokio::test]
async fn test_get_employee_deadline_is_503() {
    let request = with_deadline(
        with_query(request(Method::GET, "/employee", None), "employee_id", "300"),
        "req-get",
        Duration::from_millis(200),
    );

    let response = handle_request(&GetEmployee::new(Arc::new(SlowEmployees)), request).await;

    assert_eq!(response.status(), 503);
    assert_eq!(response.headers()["X-Amzn-ErrorType"], "TimeoutException");
}
