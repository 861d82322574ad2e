/// EventBridge publishing for customer events
use crate::error::SampleError;
use crate::models::CustomerCreatedEvent;
use async_trait::async_trait;
use aws_sdk_eventbridge::types::PutEventsRequestEntry;
use tokio::sync::Mutex;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: &CustomerCreatedEvent) -> Result<(), SampleError>;
}

pub struct EventBridgePublisher {
    client: aws_sdk_eventbridge::Client,
    event_bus_name: String,
    source: String,
}

impl EventBridgePublisher {
    pub fn new(
        client: aws_sdk_eventbridge::Client,
        event_bus_name: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            client,
            event_bus_name: event_bus_name.into(),
            source: source.into(),
        }
    }
}

#[async_trait]
impl EventPublisher for EventBridgePublisher {
    async fn publish(&self, event: &CustomerCreatedEvent) -> Result<(), SampleError> {
        let detail = serde_json::to_string(event)?;

        let entry = PutEventsRequestEntry::builder()
            .detail(detail)
            .detail_type(event.type_name())
            .event_bus_name(&self.event_bus_name)
            .source(&self.source)
            .build();

        let response = self
            .client
            .put_events()
            .entries(entry)
            .send()
            .await
            .map_err(|e| SampleError::Events(format!("EventBridge put_events failed: {}", e)))?;

        if response.failed_entry_count() > 0 {
            let reason = response
                .entries()
                .iter()
                .find_map(|entry| entry.error_message())
                .unwrap_or("unknown error");
            return Err(SampleError::Events(format!(
                "EventBridge rejected {}: {}",
                event.type_name(),
                reason
            )));
        }

        tracing::info!(
            customer_id = event.customer_id(),
            detail_type = event.type_name(),
            bus = %self.event_bus_name,
            "Published customer event"
        );
        Ok(())
    }
}

/// Captures published events instead of calling EventBridge
#[derive(Default)]
pub struct InMemoryPublisher {
    published: Mutex<Vec<CustomerCreatedEvent>>,
}

impl InMemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn published(&self) -> Vec<CustomerCreatedEvent> {
        self.published.lock().await.clone()
    }
}

#[async_trait]
impl EventPublisher for InMemoryPublisher {
    async fn publish(&self, event: &CustomerCreatedEvent) -> Result<(), SampleError> {
        self.published.lock().await.push(event.clone());
        Ok(())
    }
}
