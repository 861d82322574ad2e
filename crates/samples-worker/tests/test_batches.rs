/// SQS and Kinesis batch functions with partial failures
#[path = "common/mod.rs"]
mod common;

use common::*;
use samples_core::Invocation;
use samples_core::models::Employee;
use samples_core::services::{InMemoryNotifier, InMemoryRepository, ItemRepository, RecordingMetrics};
use samples_worker::functions::{ProcessEmployeeKinesis, ProcessEmployeeSqs, WsMessage};
use samples_worker::{handle_kinesis_event, handle_sqs_event};
use std::sync::Arc;

#[tokio::test]
async fn test_employee_sqs_batch() {
    let repository = Arc::new(InMemoryRepository::<Employee>::new());
    let handler = ProcessEmployeeSqs::new(repository.clone());
    let metrics = RecordingMetrics::new();

    let good = employee_json("e-1").to_string();
    let blank = employee_json("  ").to_string();
    let event = sqs_event(&[
        ("m1", good.as_str(), None),
        ("m2", blank.as_str(), None),
        ("m3", "{broken", None),
    ]);

    let response = handle_sqs_event(&handler, event, &Invocation::default(), &metrics).await;

    assert_eq!(response.failed_ids(), vec!["m2", "m3"]);
    let stored = repository.get_item("e-1").await.unwrap().unwrap();
    assert_eq!(stored.first_name, "Sam");
    assert_eq!(stored.dob.format("%Y-%m-%d").to_string(), "1988-04-12");
}

#[tokio::test]
async fn test_employee_sqs_repository_failure() {
    let handler = ProcessEmployeeSqs::new(Arc::new(FailingEmployees));
    let metrics = RecordingMetrics::new();
    let body = employee_json("e-2").to_string();

    let response = handle_sqs_event(
        &handler,
        sqs_event(&[("m1", body.as_str(), None)]),
        &Invocation::default(),
        &metrics,
    )
    .await;

    assert_eq!(response.failed_ids(), vec!["m1"]);
    assert_eq!(metrics.values("RecordsFailed").await, vec![1.0]);
}

#[tokio::test]
async fn test_employee_kinesis_batch() {
    let repository = Arc::new(InMemoryRepository::<Employee>::new());
    let handler = ProcessEmployeeKinesis::new(repository.clone());
    let metrics = RecordingMetrics::new();

    let good = employee_json("k-1").to_string();
    let blank = employee_json("").to_string();
    let event = kinesis_event(&[
        ("49590338271490256608559692538361571095921575989136588898", good.as_str()),
        ("2", blank.as_str()),
    ]);

    let response = handle_kinesis_event(&handler, event, &Invocation::default(), &metrics).await;

    assert_eq!(response.failed_ids(), vec!["2"]);
    assert!(repository.contains("k-1").await);
    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        serde_json::json!({"batchItemFailures": [{"itemIdentifier": "2"}]})
    );
}

#[tokio::test]
async fn test_ws_message_batch() {
    let notifier = Arc::new(InMemoryNotifier::new());
    let handler = WsMessage::new(notifier.clone());
    let metrics = RecordingMetrics::new();

    let event = sqs_event(&[
        ("m1", r#"{"text":"hello"}"#, Some("conn-1")),
        ("m2", r#"{"text":"lost"}"#, None),
    ]);

    let response = handle_sqs_event(&handler, event, &Invocation::default(), &metrics).await;

    assert_eq!(response.failed_ids(), vec!["m2"]);
    let posted = notifier.posted().await;
    assert_eq!(posted.len(), 1);
    assert_eq!(posted[0].0, "conn-1");
    let payload: serde_json::Value = serde_json::from_slice(&posted[0].1).unwrap();
    assert_eq!(payload["text"], "hello");
}

#[tokio::test]
async fn test_ws_message_gone_connection() {
    let handler = WsMessage::new(Arc::new(GoneNotifier));
    let metrics = RecordingMetrics::new();

    let response = handle_sqs_event(
        &handler,
        sqs_event(&[("m1", "hi", Some("stale"))]),
        &Invocation::default(),
        &metrics,
    )
    .await;

    assert_eq!(response.failed_ids(), vec!["m1"]);
}
