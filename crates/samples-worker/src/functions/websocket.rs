//! Relays queued messages to connected WebSocket clients.

use crate::sqs::SqsEventHandler;
use async_trait::async_trait;
use samples_core::constants::CONNECTION_ID_ATTRIBUTE;
use samples_core::models::SqsRecord;
use samples_core::services::ConnectionNotifier;
use samples_core::{Invocation, SampleError};
use serde_json::Value;
use std::sync::Arc;

pub struct WsMessage {
    notifier: Arc<dyn ConnectionNotifier>,
}

impl WsMessage {
    pub fn new(notifier: Arc<dyn ConnectionNotifier>) -> Self {
        Self { notifier }
    }
}

#[async_trait]
impl SqsEventHandler for WsMessage {
    type Message = Value;

    fn name(&self) -> &'static str {
        "ws_message"
    }

    /// JSON bodies are relayed as-is; anything else is sent as a JSON string
    fn parse_message(&self, record: &SqsRecord) -> Result<Value, SampleError> {
        Ok(serde_json::from_str(&record.body).unwrap_or_else(|_| Value::String(record.body.clone())))
    }

    async fn process_message(
        &self,
        message: Value,
        record: &SqsRecord,
        invocation: &Invocation,
    ) -> Result<(), SampleError> {
        let connection_id = record.string_attribute(CONNECTION_ID_ATTRIBUTE).ok_or_else(|| {
            SampleError::Validation(format!(
                "Unable to find SQS message attribute: {}",
                CONNECTION_ID_ATTRIBUTE
            ))
        })?;

        let payload = serde_json::to_vec(&message)?;
        invocation
            .deadline
            .run(
                "post_to_connection",
                self.notifier.post_to_connection(connection_id, &payload),
            )
            .await?;

        tracing::info!(connection_id = %connection_id, bytes = payload.len(), "Message relayed");
        Ok(())
    }
}
