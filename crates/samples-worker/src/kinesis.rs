//! Partial-batch processing of Kinesis Data Streams events.

use async_trait::async_trait;
use samples_core::models::{BatchResponse, KinesisEvent, KinesisEventRecord};
use samples_core::services::{Metrics, MetricsService};
use samples_core::{Invocation, SampleError};
use serde::de::DeserializeOwned;

#[async_trait]
pub trait KinesisEventHandler: Send + Sync {
    type Record: DeserializeOwned + Send + Sync;

    fn name(&self) -> &'static str;

    async fn validate_record(&self, _record: &Self::Record) -> Result<(), SampleError> {
        Ok(())
    }

    async fn process_record(
        &self,
        record: Self::Record,
        invocation: &Invocation,
    ) -> Result<(), SampleError>;
}

/// Decodes, validates and processes each record
///
/// Failures are identified by the record's sequence number.
pub async fn handle_kinesis_event<H>(
    handler: &H,
    event: KinesisEvent,
    invocation: &Invocation,
    metrics: &dyn MetricsService,
) -> BatchResponse
where
    H: KinesisEventHandler + ?Sized,
{
    tracing::info!(
        function = handler.name(),
        records = event.records.len(),
        "Received Kinesis event"
    );

    let mut response = BatchResponse::default();
    for record in &event.records {
        if let Err(e) = process_record(handler, record, invocation).await {
            tracing::error!(
                function = handler.name(),
                sequence_number = %record.kinesis.sequence_number,
                error = %e,
                "Failed to process Kinesis record"
            );
            response.push_failure(record.kinesis.sequence_number.clone());
        }
    }

    let failed = response.batch_item_failures.len();
    Metrics::records_processed(metrics, handler.name(), event.records.len() - failed).await;
    if failed > 0 {
        Metrics::records_failed(metrics, handler.name(), failed).await;
    }

    response
}

#[tracing::instrument(
    name = "kinesis_record",
    skip_all,
    fields(sequence_number = %record.kinesis.sequence_number)
)]
async fn process_record<H>(
    handler: &H,
    record: &KinesisEventRecord,
    invocation: &Invocation,
) -> Result<(), SampleError>
where
    H: KinesisEventHandler + ?Sized,
{
    let data = record.kinesis.decode_data()?;
    let parsed: H::Record = serde_json::from_slice(&data)?;

    handler.validate_record(&parsed).await?;
    handler.process_record(parsed, invocation).await
}
