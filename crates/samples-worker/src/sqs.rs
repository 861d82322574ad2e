//! Partial-batch processing of SQS events.
//!
//! Records are handled one at a time. A record that fails to parse or
//! process is reported back through `batchItemFailures` so only it is
//! redelivered; the rest of the batch is deleted from the queue.

use async_trait::async_trait;
use samples_core::models::{BatchResponse, SqsEvent, SqsRecord};
use samples_core::services::{Metrics, MetricsService};
use samples_core::utils::preview_body;
use samples_core::{Invocation, SampleError};
use serde::de::DeserializeOwned;

#[async_trait]
pub trait SqsEventHandler: Send + Sync {
    type Message: DeserializeOwned + Send;

    /// Function name used in logs and metric dimensions
    fn name(&self) -> &'static str;

    /// Reads the message from the record body as JSON
    fn parse_message(&self, record: &SqsRecord) -> Result<Self::Message, SampleError> {
        Ok(serde_json::from_str(&record.body)?)
    }

    async fn process_message(
        &self,
        message: Self::Message,
        record: &SqsRecord,
        invocation: &Invocation,
    ) -> Result<(), SampleError>;
}

/// Processes every record and collects the ids of those that failed
pub async fn handle_sqs_event<H>(
    handler: &H,
    event: SqsEvent,
    invocation: &Invocation,
    metrics: &dyn MetricsService,
) -> BatchResponse
where
    H: SqsEventHandler + ?Sized,
{
    tracing::info!(
        function = handler.name(),
        records = event.records.len(),
        "Received SQS event"
    );

    let mut response = BatchResponse::default();
    for record in &event.records {
        if let Err(e) = process_record(handler, record, invocation).await {
            tracing::error!(
                function = handler.name(),
                message_id = %record.message_id,
                body = %preview_body(&record.body),
                error = %e,
                "Failed to process SQS message"
            );
            response.push_failure(record.message_id.clone());
        }
    }

    let failed = response.batch_item_failures.len();
    Metrics::records_processed(metrics, handler.name(), event.records.len() - failed).await;
    if failed > 0 {
        Metrics::records_failed(metrics, handler.name(), failed).await;
    }

    response
}

#[tracing::instrument(name = "sqs_record", skip_all, fields(message_id = %record.message_id))]
async fn process_record<H>(
    handler: &H,
    record: &SqsRecord,
    invocation: &Invocation,
) -> Result<(), SampleError>
where
    H: SqsEventHandler + ?Sized,
{
    let message = handler.parse_message(record)?;
    handler.process_message(message, record, invocation).await
}
