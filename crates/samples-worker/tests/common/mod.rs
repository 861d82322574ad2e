//! Event builders and failing service stubs for the worker integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use base64::Engine;
use samples_core::SampleError;
use samples_core::models::{Employee, KinesisEvent, S3Event, SqsEvent, UpsertResult};
use samples_core::services::{ConnectionNotifier, ItemRepository, StorageService};
use serde_json::{Value, json};

pub fn employee_json(id: &str) -> Value {
    json!({
        "employee_id": id,
        "email": "sam@example.com",
        "first_name": "Sam",
        "last_name": "Lee",
        "dob": "04/12/1988",
        "hire_date": "2021-06-01T09:00:00"
    })
}

/// SQS event; each entry is `(message_id, body, connectionId attribute)`
pub fn sqs_event(messages: &[(&str, &str, Option<&str>)]) -> SqsEvent {
    let records: Vec<Value> = messages
        .iter()
        .map(|(id, body, connection_id)| {
            let attributes = match connection_id {
                Some(cid) => json!({"connectionId": {"stringValue": cid, "dataType": "String"}}),
                None => json!({}),
            };
            json!({
                "messageId": id,
                "receiptHandle": format!("handle-{}", id),
                "body": body,
                "attributes": {"ApproximateReceiveCount": "1"},
                "messageAttributes": attributes,
                "eventSourceARN": "arn:aws:sqs:us-east-1:000000000000:employees"
            })
        })
        .collect();

    serde_json::from_value(json!({ "Records": records })).unwrap()
}

/// Kinesis event; each entry is `(sequence_number, payload)` with the payload base64-encoded
pub fn kinesis_event(records: &[(&str, &str)]) -> KinesisEvent {
    let records: Vec<Value> = records
        .iter()
        .map(|(sequence_number, payload)| {
            json!({
                "kinesis": {
                    "kinesisSchemaVersion": "1.0",
                    "partitionKey": "employees",
                    "sequenceNumber": sequence_number,
                    "data": base64::engine::general_purpose::STANDARD.encode(payload),
                    "approximateArrivalTimestamp": 1700000000.0
                },
                "eventSource": "aws:kinesis",
                "eventID": format!("shardId-000000000000:{}", sequence_number),
                "eventName": "aws:kinesis:record",
                "awsRegion": "us-east-1"
            })
        })
        .collect();

    serde_json::from_value(json!({ "Records": records })).unwrap()
}

/// S3 event with one `ObjectCreated:Put` record per `(bucket, key)`
pub fn s3_event(objects: &[(&str, &str)]) -> S3Event {
    let records: Vec<Value> = objects
        .iter()
        .map(|(bucket, key)| {
            json!({
                "eventVersion": "2.1",
                "eventSource": "aws:s3",
                "awsRegion": "us-east-1",
                "eventTime": "2024-01-01T00:00:00.000Z",
                "eventName": "ObjectCreated:Put",
                "s3": {
                    "bucket": {"name": bucket, "arn": format!("arn:aws:s3:::{}", bucket)},
                    "object": {"key": key, "size": 11}
                }
            })
        })
        .collect();

    serde_json::from_value(json!({ "Records": records })).unwrap()
}

/// Employee table that rejects every write
pub struct FailingEmployees;

#[async_trait]
impl ItemRepository<Employee> for FailingEmployees {
    async fn get_item(&self, _id: &str) -> Result<Option<Employee>, SampleError> {
        Err(SampleError::Repository("table unavailable".to_string()))
    }

    async fn put_item(&self, _record: &Employee) -> Result<UpsertResult, SampleError> {
        Err(SampleError::Repository("table unavailable".to_string()))
    }

    async fn delete_item(&self, _id: &str) -> Result<bool, SampleError> {
        Err(SampleError::Repository("table unavailable".to_string()))
    }
}

/// Object store whose uploads fail
pub struct ReadOnlyStorage {
    pub content: Vec<u8>,
}

#[async_trait]
impl StorageService for ReadOnlyStorage {
    async fn list_buckets(&self, _prefix: Option<String>) -> Result<Vec<String>, SampleError> {
        Ok(Vec::new())
    }

    async fn download(&self, _bucket: &str, _key: &str) -> Result<Vec<u8>, SampleError> {
        Ok(self.content.clone())
    }

    async fn upload(&self, bucket: &str, _key: &str, _data: &[u8]) -> Result<(), SampleError> {
        Err(SampleError::Storage(format!("Access denied to {}", bucket)))
    }
}

/// Notifier for connections that have gone away
pub struct GoneNotifier;

#[async_trait]
impl ConnectionNotifier for GoneNotifier {
    async fn post_to_connection(&self, connection_id: &str, _data: &[u8]) -> Result<(), SampleError> {
        Err(SampleError::Http(format!("Connection {} is gone", connection_id)))
    }
}
