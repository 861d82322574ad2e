//! S3 object notifications: forward to a queue, or transform the object.

use samples_core::models::{S3Event, S3EventRecord, S3NotificationMessage, SamplesConfig};
use samples_core::services::{QueueService, StorageService};
use samples_core::{Invocation, SampleError};

/// Forwards the first record of the event to the configured queue
///
/// Returns the SQS message id, or `None` when the event has no usable record.
pub async fn s3_notification(
    queue: &dyn QueueService,
    config: &SamplesConfig,
    event: S3Event,
    invocation: &Invocation,
) -> Result<Option<String>, SampleError> {
    let Some(record) = event.records.first() else {
        tracing::info!("S3 event has no records");
        return Ok(None);
    };
    let Some(message) = S3NotificationMessage::from_record(record) else {
        tracing::warn!(event_name = %record.event_name, "S3 record has no s3 section");
        return Ok(None);
    };

    let queue_name = config.require_queue_name()?;
    let body = serde_json::to_string(&message)?;

    let queue_url = invocation
        .deadline
        .run("get_queue_url", queue.queue_url(queue_name))
        .await?;
    let message_id = invocation
        .deadline
        .run("send_message", queue.send_message(&queue_url, &body))
        .await?;

    tracing::info!(
        bucket = %message.bucket_name,
        key = %message.object_key,
        message_id = %message_id,
        "S3 notification forwarded"
    );
    Ok(Some(message_id))
}

/// Writes an upper-cased copy of every notified object to the destination bucket
///
/// The first failure is returned so the invocation fails and the event is
/// routed to the function's dead-letter queue.
pub async fn s3_transformer(
    storage: &dyn StorageService,
    config: &SamplesConfig,
    event: S3Event,
    invocation: &Invocation,
) -> Result<(), SampleError> {
    tracing::info!(records = event.records.len(), "Received S3 event");

    for record in &event.records {
        transform_record(storage, config, record, invocation).await?;
    }
    Ok(())
}

#[tracing::instrument(name = "s3_record", skip_all, fields(event_name = %record.event_name))]
async fn transform_record(
    storage: &dyn StorageService,
    config: &SamplesConfig,
    record: &S3EventRecord,
    invocation: &Invocation,
) -> Result<(), SampleError> {
    let Some(s3) = record.s3.as_ref() else {
        tracing::warn!("S3 event object is missing, skipping");
        return Ok(());
    };

    let bucket = &s3.bucket.name;
    let key = s3.object.decoded_key();

    let result = async {
        let destination = config.require_destination_bucket()?;
        let original = invocation
            .deadline
            .run("download", storage.download(bucket, &key))
            .await?;

        let transformed = String::from_utf8_lossy(&original).to_uppercase();
        invocation
            .deadline
            .run(
                "upload",
                storage.upload(destination, &key, transformed.as_bytes()),
            )
            .await
    }
    .await;

    if let Err(e) = &result {
        tracing::error!(
            bucket = %bucket,
            key = %key,
            error = %e,
            "Error transforming object; check that it exists and the bucket is in this region"
        );
    }
    result
}
