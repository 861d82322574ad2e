/// Pushes payloads to connected WebSocket clients
use crate::error::SampleError;
use async_trait::async_trait;
use aws_sdk_apigatewaymanagement::primitives::Blob;
use tokio::sync::Mutex;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConnectionNotifier: Send + Sync {
    async fn post_to_connection(&self, connection_id: &str, data: &[u8]) -> Result<(), SampleError>;
}

pub struct ApiGatewayNotifier {
    client: aws_sdk_apigatewaymanagement::Client,
}

impl ApiGatewayNotifier {
    pub fn new(client: aws_sdk_apigatewaymanagement::Client) -> Self {
        Self { client }
    }

    /// Builds a management client pointed at the WebSocket API's callback URL
    pub fn from_sdk_config(sdk_config: &aws_config::SdkConfig, callback_url: &str) -> Self {
        let config = aws_sdk_apigatewaymanagement::config::Builder::from(sdk_config)
            .endpoint_url(callback_url)
            .build();
        Self::new(aws_sdk_apigatewaymanagement::Client::from_conf(config))
    }
}

#[async_trait]
impl ConnectionNotifier for ApiGatewayNotifier {
    async fn post_to_connection(&self, connection_id: &str, data: &[u8]) -> Result<(), SampleError> {
        self.client
            .post_to_connection()
            .connection_id(connection_id)
            .data(Blob::new(data.to_vec()))
            .send()
            .await
            .map_err(|e| SampleError::Http(format!("post_to_connection failed: {}", e)))?;

        tracing::info!(
            connection_id = connection_id,
            bytes = data.len(),
            "Posted to connection"
        );
        Ok(())
    }
}

/// Records posted payloads per connection
#[derive(Default)]
pub struct InMemoryNotifier {
    posted: Mutex<Vec<(String, Vec<u8>)>>,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn posted(&self) -> Vec<(String, Vec<u8>)> {
        self.posted.lock().await.clone()
    }
}

#[async_trait]
impl ConnectionNotifier for InMemoryNotifier {
    async fn post_to_connection(&self, connection_id: &str, data: &[u8]) -> Result<(), SampleError> {
        self.posted
            .lock()
            .await
            .push((connection_id.to_string(), data.to_vec()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_notifier() {
        let notifier = InMemoryNotifier::new();
        notifier.post_to_connection("abc=", b"\"hi\"").await.unwrap();
        assert_eq!(notifier.posted().await, vec![("abc=".to_string(), b"\"hi\"".to_vec())]);
    }

    #[tokio::test]
    async fn test_mock_notifier_gone() {
        let mut notifier = MockConnectionNotifier::new();
        notifier
            .expect_post_to_connection()
            .withf(|id, _| id == "stale")
            .returning(|_, _| Err(SampleError::Http("GoneException".to_string())));

        assert!(notifier.post_to_connection("stale", b"{}").await.is_err());
    }
}
