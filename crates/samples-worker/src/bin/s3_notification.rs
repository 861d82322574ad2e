use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use samples_core::Invocation;
use samples_core::models::S3Event;
use samples_core::services::Metrics;
use samples_worker::WorkerContext;
use samples_worker::functions::s3_notification;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    samples_core::telemetry::init();
    info!("Starting s3_notification function");

    let ctx = WorkerContext::new().await?;
    let queue = ctx.queue();
    Metrics::cold_start(ctx.metrics.as_ref(), "s3_notification").await;

    run(service_fn(|event: LambdaEvent<S3Event>| {
        let ctx = ctx.clone();
        let queue = queue.clone();
        async move {
            let invocation = Invocation::from_context(&event.context);
            match s3_notification(queue.as_ref(), &ctx.config, event.payload, &invocation).await {
                Ok(message_id) => Ok::<Option<String>, Error>(message_id),
                Err(e) => {
                    Metrics::error_occurred(ctx.metrics.as_ref(), e.error_type(), "s3_notification")
                        .await;
                    Err(e.into())
                }
            }
        }
    }))
    .await
}
