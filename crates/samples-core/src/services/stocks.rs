/// Stocks table access
use crate::error::SampleError;
use crate::models::Stock;
use crate::models::attributes::key;
use crate::models::stock::{STOCK_ID, item_to_stock};
use async_trait::async_trait;
use std::collections::HashMap;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StockRepository: Send + Sync {
    /// Fails with `NotFound` when the stock does not exist
    async fn get_stock_value(&self, stock_id: &str) -> Result<Stock, SampleError>;
}

pub struct DynamoDbStocks {
    client: aws_sdk_dynamodb::Client,
    table_name: String,
}

impl DynamoDbStocks {
    pub fn new(client: aws_sdk_dynamodb::Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl StockRepository for DynamoDbStocks {
    async fn get_stock_value(&self, stock_id: &str) -> Result<Stock, SampleError> {
        let response = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(key(STOCK_ID, stock_id)))
            .send()
            .await
            .map_err(|e| SampleError::Repository(format!("DynamoDB get_item failed: {}", e)))?;

        let item = response
            .item()
            .ok_or_else(|| SampleError::NotFound(format!("Stock with id {} not found", stock_id)))?;

        item_to_stock(item)
    }
}

#[derive(Default)]
pub struct InMemoryStocks {
    values: HashMap<String, f64>,
}

impl InMemoryStocks {
    pub fn new(values: impl IntoIterator<Item = (String, f64)>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }
}

#[async_trait]
impl StockRepository for InMemoryStocks {
    async fn get_stock_value(&self, stock_id: &str) -> Result<Stock, SampleError> {
        self.values
            .get(stock_id)
            .map(|value| Stock {
                stock_id: stock_id.to_string(),
                value: *value,
            })
            .ok_or_else(|| SampleError::NotFound(format!("Stock with id {} not found", stock_id)))
    }
}
