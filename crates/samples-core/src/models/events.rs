/// AWS Lambda event envelopes consumed by the worker functions
use crate::error::SampleError;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// S3 notification event
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct S3Event {
    #[serde(rename = "Records", default)]
    pub records: Vec<S3EventRecord>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct S3EventRecord {
    #[serde(rename = "eventVersion", default)]
    pub event_version: String,
    #[serde(rename = "eventSource", default)]
    pub event_source: String,
    #[serde(rename = "awsRegion", default)]
    pub aws_region: String,
    #[serde(rename = "eventTime", default)]
    pub event_time: String,
    #[serde(rename = "eventName", default)]
    pub event_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3: Option<S3Info>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct S3Info {
    pub bucket: S3Bucket,
    pub object: S3Object,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct S3Bucket {
    pub name: String,
    #[serde(default)]
    pub arn: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct S3Object {
    pub key: String,
    pub size: Option<i64>,
    #[serde(rename = "eTag")]
    pub etag: Option<String>,
}

impl S3Object {
    /// Object key with the notification's form-encoding removed
    ///
    /// S3 notifications encode spaces as `+` and escape other reserved
    /// characters.
    pub fn decoded_key(&self) -> String {
        let spaced = self.key.replace('+', " ");
        String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
    }
}

/// SQS batch event
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SqsEvent {
    #[serde(rename = "Records", default)]
    pub records: Vec<SqsRecord>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SqsRecord {
    #[serde(rename = "messageId")]
    pub message_id: String,
    #[serde(rename = "receiptHandle", default)]
    pub receipt_handle: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub attributes: HashMap<String, String>,
    #[serde(rename = "messageAttributes", default)]
    pub message_attributes: HashMap<String, MessageAttribute>,
    #[serde(rename = "eventSourceARN", default, skip_serializing_if = "Option::is_none")]
    pub event_source_arn: Option<String>,
}

impl SqsRecord {
    /// String value of a message attribute
    pub fn string_attribute(&self, name: &str) -> Option<&str> {
        self.message_attributes
            .get(name)
            .and_then(|attr| attr.string_value.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MessageAttribute {
    #[serde(rename = "stringValue", skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,
    #[serde(rename = "binaryValue", skip_serializing_if = "Option::is_none")]
    pub binary_value: Option<String>,
    #[serde(rename = "dataType")]
    pub data_type: String,
}

/// Kinesis Data Streams batch event
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KinesisEvent {
    #[serde(rename = "Records", default)]
    pub records: Vec<KinesisEventRecord>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KinesisEventRecord {
    pub kinesis: KinesisRecord,
    #[serde(default)]
    pub event_source: Option<String>,
    #[serde(rename = "eventID", default)]
    pub event_id: Option<String>,
    #[serde(default)]
    pub event_name: Option<String>,
    #[serde(default)]
    pub aws_region: Option<String>,
    #[serde(rename = "eventSourceARN", default)]
    pub event_source_arn: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KinesisRecord {
    #[serde(default)]
    pub kinesis_schema_version: Option<String>,
    #[serde(default)]
    pub partition_key: String,
    pub sequence_number: String,
    /// Base64-encoded record payload
    pub data: String,
    #[serde(default)]
    pub approximate_arrival_timestamp: Option<f64>,
}

impl KinesisRecord {
    pub fn decode_data(&self) -> Result<Vec<u8>, SampleError> {
        base64::engine::general_purpose::STANDARD
            .decode(self.data.as_bytes())
            .map_err(|e| {
                SampleError::Serialization(format!(
                    "Kinesis record {} is not valid base64: {}",
                    self.sequence_number, e
                ))
            })
    }
}

/// Partial batch response understood by the SQS and Kinesis event source mappings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BatchResponse {
    #[serde(rename = "batchItemFailures")]
    pub batch_item_failures: Vec<BatchItemFailure>,
}

impl BatchResponse {
    pub fn push_failure(&mut self, item_identifier: impl Into<String>) {
        self.batch_item_failures.push(BatchItemFailure {
            item_identifier: item_identifier.into(),
        });
    }

    pub fn failed_ids(&self) -> Vec<&str> {
        self.batch_item_failures
            .iter()
            .map(|f| f.item_identifier.as_str())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BatchItemFailure {
    #[serde(rename = "itemIdentifier")]
    pub item_identifier: String,
}
