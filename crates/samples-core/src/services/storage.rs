/// S3 storage service
use crate::error::SampleError;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorageService: Send + Sync {
    /// Bucket names, optionally restricted to those starting with `prefix`
    async fn list_buckets(&self, prefix: Option<String>) -> Result<Vec<String>, SampleError>;
    async fn download(&self, bucket: &str, key: &str) -> Result<Vec<u8>, SampleError>;
    async fn upload(&self, bucket: &str, key: &str, data: &[u8]) -> Result<(), SampleError>;
}

/// S3 storage service implementation
pub struct S3StorageService {
    client: aws_sdk_s3::Client,
}

impl S3StorageService {
    pub fn new(client: aws_sdk_s3::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StorageService for S3StorageService {
    async fn list_buckets(&self, prefix: Option<String>) -> Result<Vec<String>, SampleError> {
        let response = self
            .client
            .list_buckets()
            .send()
            .await
            .map_err(|e| SampleError::Storage(format!("S3 list_buckets failed: {}", e)))?;

        let names: Vec<String> = response
            .buckets()
            .iter()
            .filter_map(|bucket| bucket.name())
            .filter(|name| prefix.as_deref().is_none_or(|p| name.starts_with(p)))
            .map(|name| name.to_string())
            .collect();

        tracing::info!(count = names.len(), "Listed buckets");
        Ok(names)
    }

    async fn download(&self, bucket: &str, key: &str) -> Result<Vec<u8>, SampleError> {
        let response = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| SampleError::Storage(format!("S3 download failed: {}", e)))?;

        let data = response
            .body
            .collect()
            .await
            .map_err(|e| SampleError::Storage(format!("Failed to read S3 object body: {}", e)))?
            .into_bytes()
            .to_vec();

        tracing::info!(
            "Downloaded from s3://{}/{} ({} bytes)",
            bucket,
            key,
            data.len()
        );
        Ok(data)
    }

    async fn upload(&self, bucket: &str, key: &str, data: &[u8]) -> Result<(), SampleError> {
        use aws_sdk_s3::primitives::ByteStream;

        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(data.to_vec()))
            .send()
            .await
            .map_err(|e| SampleError::Storage(format!("S3 upload failed: {}", e)))?;

        tracing::info!("Uploaded to s3://{}/{}", bucket, key);
        Ok(())
    }
}

/// In-memory object store keyed by bucket then key
#[derive(Default)]
pub struct InMemoryStorage {
    objects: Mutex<HashMap<String, HashMap<String, Vec<u8>>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_buckets(names: &[&str]) -> Self {
        Self {
            objects: Mutex::new(
                names
                    .iter()
                    .map(|name| (name.to_string(), HashMap::new()))
                    .collect(),
            ),
        }
    }

    pub async fn object(&self, bucket: &str, key: &str) -> Option<Vec<u8>> {
        self.objects
            .lock()
            .await
            .get(bucket)
            .and_then(|objects| objects.get(key))
            .cloned()
    }
}

#[async_trait]
impl StorageService for InMemoryStorage {
    async fn list_buckets(&self, prefix: Option<String>) -> Result<Vec<String>, SampleError> {
        let mut names: Vec<String> = self
            .objects
            .lock()
            .await
            .keys()
            .filter(|name| prefix.as_deref().is_none_or(|p| name.starts_with(p)))
            .cloned()
            .collect();
        names.sort();
        Ok(names)
    }

    async fn download(&self, bucket: &str, key: &str) -> Result<Vec<u8>, SampleError> {
        self.object(bucket, key)
            .await
            .ok_or_else(|| SampleError::Storage(format!("No such key: s3://{}/{}", bucket, key)))
    }

    async fn upload(&self, bucket: &str, key: &str, data: &[u8]) -> Result<(), SampleError> {
        self.objects
            .lock()
            .await
            .entry(bucket.to_string())
            .or_default()
            .insert(key.to_string(), data.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_round_trip() {
        let storage = InMemoryStorage::new();
        storage.upload("bucket", "a.txt", b"hello").await.unwrap();
        assert_eq!(storage.download("bucket", "a.txt").await.unwrap(), b"hello");
        assert!(storage.download("bucket", "b.txt").await.is_err());
    }

    #[tokio::test]
    async fn test_list_with_prefix() {
        let storage = InMemoryStorage::with_buckets(&["logs-a", "data-b", "logs-c"]);
        assert_eq!(storage.list_buckets(None).await.unwrap().len(), 3);
        assert_eq!(
            storage.list_buckets(Some("logs".to_string())).await.unwrap(),
            vec!["logs-a".to_string(), "logs-c".to_string()]
        );
    }

    #[tokio::test]
    async fn test_mock_storage_failure() {
        let mut storage = MockStorageService::new();
        storage
            .expect_list_buckets()
            .returning(|_| Err(SampleError::Storage("AccessDenied".to_string())));
        assert!(storage.list_buckets(None).await.is_err());
    }
}
