//! DynamoDB attribute helpers shared by the record conversions.

use crate::error::SampleError;
use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;

pub type Item = HashMap<String, AttributeValue>;

pub(crate) fn get_string(item: &Item, key: &str) -> Result<String, SampleError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| SampleError::Repository(format!("Missing or invalid field: {}", key)))
}

pub(crate) fn get_optional_string(item: &Item, key: &str) -> Option<String> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
}

pub(crate) fn get_number(item: &Item, key: &str) -> Result<f64, SampleError> {
    let raw = item
        .get(key)
        .and_then(|v| v.as_n().ok())
        .ok_or_else(|| SampleError::Repository(format!("Missing or invalid field: {}", key)))?;

    raw.parse::<f64>()
        .map_err(|e| SampleError::Repository(format!("Invalid number in {}: {}", key, e)))
}

/// Single-attribute key map
pub fn key(name: &str, value: &str) -> Item {
    HashMap::from([(name.to_string(), AttributeValue::S(value.to_string()))])
}
