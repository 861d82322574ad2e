/// Products table access
use crate::constants::PRODUCT_SCAN_LIMIT;
use crate::error::SampleError;
use crate::models::attributes::key;
use crate::models::product::{item_to_product, product_to_item};
use crate::models::{Product, ProductWrapper, UpsertResult};
use async_trait::async_trait;
use aws_sdk_dynamodb::types::ReturnValue;
use std::collections::HashMap;
use tokio::sync::Mutex;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductsDao: Send + Sync {
    async fn get_product(&self, id: &str) -> Result<Option<Product>, SampleError>;
    async fn put_product(&self, product: &Product) -> Result<UpsertResult, SampleError>;
    async fn delete_product(&self, id: &str) -> Result<(), SampleError>;
    /// Single scan page of at most 20 products
    async fn get_all_products(&self) -> Result<ProductWrapper, SampleError>;
}

/// DynamoDB-backed products DAO
pub struct DynamoDbProducts {
    client: aws_sdk_dynamodb::Client,
    table_name: String,
}

impl DynamoDbProducts {
    pub fn new(client: aws_sdk_dynamodb::Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl ProductsDao for DynamoDbProducts {
    async fn get_product(&self, id: &str) -> Result<Option<Product>, SampleError> {
        let response = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(key("id", id)))
            .send()
            .await
            .map_err(|e| SampleError::Repository(format!("DynamoDB get_item failed: {}", e)))?;

        match response.item() {
            Some(item) => {
                let product = item_to_product(item)?;
                tracing::debug!(product_id = id, "Product found");
                Ok(Some(product))
            }
            None => Ok(None),
        }
    }

    async fn put_product(&self, product: &Product) -> Result<UpsertResult, SampleError> {
        let response = self
            .client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(product_to_item(product)))
            .return_values(ReturnValue::AllOld)
            .send()
            .await
            .map_err(|e| SampleError::Repository(format!("DynamoDB put_item failed: {}", e)))?;

        let result = UpsertResult::from_old_attributes(response.attributes());
        tracing::info!(product_id = %product.id, result = %result, "Stored product");
        Ok(result)
    }

    async fn delete_product(&self, id: &str) -> Result<(), SampleError> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(key("id", id)))
            .send()
            .await
            .map_err(|e| SampleError::Repository(format!("DynamoDB delete_item failed: {}", e)))?;

        tracing::info!(product_id = id, "Deleted product");
        Ok(())
    }

    async fn get_all_products(&self) -> Result<ProductWrapper, SampleError> {
        let response = self
            .client
            .scan()
            .table_name(&self.table_name)
            .limit(PRODUCT_SCAN_LIMIT)
            .send()
            .await
            .map_err(|e| SampleError::Repository(format!("DynamoDB scan failed: {}", e)))?;

        let products = response
            .items()
            .iter()
            .map(item_to_product)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(count = products.len(), "Scanned products");
        Ok(ProductWrapper::new(products))
    }
}

/// In-memory products DAO for tests and local runs
#[derive(Default)]
pub struct InMemoryProducts {
    products: Mutex<HashMap<String, Product>>,
}

impl InMemoryProducts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: Mutex::new(products.into_iter().map(|p| (p.id.clone(), p)).collect()),
        }
    }

    pub async fn len(&self) -> usize {
        self.products.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.products.lock().await.is_empty()
    }
}

#[async_trait]
impl ProductsDao for InMemoryProducts {
    async fn get_product(&self, id: &str) -> Result<Option<Product>, SampleError> {
        Ok(self.products.lock().await.get(id).cloned())
    }

    async fn put_product(&self, product: &Product) -> Result<UpsertResult, SampleError> {
        let previous = self
            .products
            .lock()
            .await
            .insert(product.id.clone(), product.clone());

        Ok(match previous {
            Some(_) => UpsertResult::Updated,
            None => UpsertResult::Inserted,
        })
    }

    async fn delete_product(&self, id: &str) -> Result<(), SampleError> {
        self.products.lock().await.remove(id);
        Ok(())
    }

    async fn get_all_products(&self) -> Result<ProductWrapper, SampleError> {
        let products = self.products.lock().await;
        let mut all: Vec<Product> = products.values().cloned().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all.truncate(PRODUCT_SCAN_LIMIT as usize);
        Ok(ProductWrapper::new(all))
    }
}
