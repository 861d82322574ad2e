use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use samples_core::Invocation;
use samples_core::models::S3Event;
use samples_core::services::Metrics;
use samples_worker::WorkerContext;
use samples_worker::functions::s3_transformer;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    samples_core::telemetry::init();
    info!("Starting s3_transformer function");

    let ctx = WorkerContext::new().await?;
    let storage = ctx.storage();
    Metrics::cold_start(ctx.metrics.as_ref(), "s3_transformer").await;

    run(service_fn(|event: LambdaEvent<S3Event>| {
        let ctx = ctx.clone();
        let storage = storage.clone();
        async move {
            let invocation = Invocation::from_context(&event.context);
            match s3_transformer(storage.as_ref(), &ctx.config, event.payload, &invocation).await {
                Ok(()) => Ok::<(), Error>(()),
                Err(e) => {
                    Metrics::error_occurred(ctx.metrics.as_ref(), e.error_type(), "s3_transformer")
                        .await;
                    Err(e.into())
                }
            }
        }
    }))
    .await
}
