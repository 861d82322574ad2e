/// SQS queue service
use crate::error::SampleError;
use async_trait::async_trait;
use tokio::sync::Mutex;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QueueService: Send + Sync {
    /// Resolves a queue name to its URL
    async fn queue_url(&self, queue_name: &str) -> Result<String, SampleError>;
    /// Sends a message and returns its id
    async fn send_message(&self, queue_url: &str, message: &str) -> Result<String, SampleError>;
}

pub struct SqsQueueService {
    client: aws_sdk_sqs::Client,
}

impl SqsQueueService {
    pub fn new(client: aws_sdk_sqs::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl QueueService for SqsQueueService {
    async fn queue_url(&self, queue_name: &str) -> Result<String, SampleError> {
        let response = self
            .client
            .get_queue_url()
            .queue_name(queue_name)
            .send()
            .await
            .map_err(|e| SampleError::Queue(format!("SQS get_queue_url failed: {}", e)))?;

        response
            .queue_url()
            .map(|url| url.to_string())
            .ok_or_else(|| SampleError::Queue(format!("No URL returned for queue {}", queue_name)))
    }

    async fn send_message(&self, queue_url: &str, message: &str) -> Result<String, SampleError> {
        let response = self
            .client
            .send_message()
            .queue_url(queue_url)
            .message_body(message)
            .send()
            .await
            .map_err(|e| SampleError::Queue(format!("SQS send_message failed: {}", e)))?;

        let message_id = response
            .message_id()
            .ok_or_else(|| SampleError::Queue("No message ID returned".to_string()))?
            .to_string();

        tracing::info!("Sent message to queue: {} (id: {})", queue_url, message_id);
        Ok(message_id)
    }
}

/// Records sent messages instead of calling SQS
#[derive(Default)]
pub struct InMemoryQueue {
    sent: Mutex<Vec<(String, String)>>,
}

impl InMemoryQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(queue_url, body)` pairs in send order
    pub async fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl QueueService for InMemoryQueue {
    async fn queue_url(&self, queue_name: &str) -> Result<String, SampleError> {
        Ok(format!("https://sqs.local/000000000000/{}", queue_name))
    }

    async fn send_message(&self, queue_url: &str, message: &str) -> Result<String, SampleError> {
        let mut sent = self.sent.lock().await;
        sent.push((queue_url.to_string(), message.to_string()));
        Ok(format!("message-{}", sent.len()))
    }
}
