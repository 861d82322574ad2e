/// Generic single-key DynamoDB repository
use crate::error::SampleError;
use crate::models::attributes::{Item, key};
use crate::models::connection::{CONNECTION_ID, connection_to_item, item_to_connection};
use crate::models::employee::{EMPLOYEE_ID, employee_to_item, item_to_employee};
use crate::models::{Connection, Employee, UpsertResult};
use async_trait::async_trait;
use aws_sdk_dynamodb::types::ReturnValue;
use std::collections::HashMap;
use std::marker::PhantomData;
use tokio::sync::Mutex;

/// A record stored in a table keyed by a single string attribute
pub trait TableRecord: Clone + Send + Sync + 'static {
    /// Name of the partition key attribute
    const KEY_ATTRIBUTE: &'static str;

    fn key_value(&self) -> &str;
    fn to_item(&self) -> Item;
    fn from_item(item: &Item) -> Result<Self, SampleError>;
}

impl TableRecord for Employee {
    const KEY_ATTRIBUTE: &'static str = EMPLOYEE_ID;

    fn key_value(&self) -> &str {
        &self.employee_id
    }

    fn to_item(&self) -> Item {
        employee_to_item(self)
    }

    fn from_item(item: &Item) -> Result<Self, SampleError> {
        item_to_employee(item)
    }
}

impl TableRecord for Connection {
    const KEY_ATTRIBUTE: &'static str = CONNECTION_ID;

    fn key_value(&self) -> &str {
        &self.connection_id
    }

    fn to_item(&self) -> Item {
        connection_to_item(self)
    }

    fn from_item(item: &Item) -> Result<Self, SampleError> {
        item_to_connection(item)
    }
}

#[async_trait]
pub trait ItemRepository<T: TableRecord>: Send + Sync {
    async fn get_item(&self, id: &str) -> Result<Option<T>, SampleError>;
    async fn put_item(&self, record: &T) -> Result<UpsertResult, SampleError>;
    /// Returns whether the delete request succeeded; deleting a missing key succeeds
    async fn delete_item(&self, id: &str) -> Result<bool, SampleError>;
}

pub type EmployeeRepository = dyn ItemRepository<Employee>;
pub type ConnectionRepository = dyn ItemRepository<Connection>;

pub struct DynamoDbRepository<T> {
    client: aws_sdk_dynamodb::Client,
    table_name: String,
    _record: PhantomData<fn() -> T>,
}

impl<T: TableRecord> DynamoDbRepository<T> {
    pub fn new(client: aws_sdk_dynamodb::Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            _record: PhantomData,
        }
    }
}

#[async_trait]
impl<T: TableRecord> ItemRepository<T> for DynamoDbRepository<T> {
    async fn get_item(&self, id: &str) -> Result<Option<T>, SampleError> {
        let response = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(key(T::KEY_ATTRIBUTE, id)))
            .send()
            .await
            .map_err(|e| SampleError::Repository(format!("DynamoDB get_item failed: {}", e)))?;

        response.item().map(T::from_item).transpose()
    }

    async fn put_item(&self, record: &T) -> Result<UpsertResult, SampleError> {
        let response = self
            .client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(record.to_item()))
            .return_values(ReturnValue::AllOld)
            .send()
            .await
            .map_err(|e| SampleError::Repository(format!("DynamoDB put_item failed: {}", e)))?;

        let result = UpsertResult::from_old_attributes(response.attributes());
        tracing::info!(
            table = %self.table_name,
            key = record.key_value(),
            result = %result,
            "Stored item"
        );
        Ok(result)
    }

    async fn delete_item(&self, id: &str) -> Result<bool, SampleError> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(key(T::KEY_ATTRIBUTE, id)))
            .send()
            .await
            .map_err(|e| SampleError::Repository(format!("DynamoDB delete_item failed: {}", e)))?;

        tracing::info!(table = %self.table_name, key = id, "Deleted item");
        Ok(true)
    }
}

/// In-memory repository for tests and local runs
pub struct InMemoryRepository<T> {
    items: Mutex<HashMap<String, T>>,
}

impl<T: TableRecord> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_items(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: Mutex::new(
                items
                    .into_iter()
                    .map(|item| (item.key_value().to_string(), item))
                    .collect(),
            ),
        }
    }

    pub async fn contains(&self, id: &str) -> bool {
        self.items.lock().await.contains_key(id)
    }

    pub async fn len(&self) -> usize {
        self.items.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.lock().await.is_empty()
    }
}

impl<T: TableRecord> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: TableRecord> ItemRepository<T> for InMemoryRepository<T> {
    async fn get_item(&self, id: &str) -> Result<Option<T>, SampleError> {
        Ok(self.items.lock().await.get(id).cloned())
    }

    async fn put_item(&self, record: &T) -> Result<UpsertResult, SampleError> {
        let previous = self
            .items
            .lock()
            .await
            .insert(record.key_value().to_string(), record.clone());

        Ok(match previous {
            Some(_) => UpsertResult::Updated,
            None => UpsertResult::Inserted,
        })
    }

    async fn delete_item(&self, id: &str) -> Result<bool, SampleError> {
        self.items.lock().await.remove(id);
        Ok(true)
    }
}
