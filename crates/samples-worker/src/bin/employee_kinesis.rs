use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use samples_core::Invocation;
use samples_core::models::{BatchResponse, KinesisEvent};
use samples_core::services::Metrics;
use samples_worker::functions::ProcessEmployeeKinesis;
use samples_worker::{WorkerContext, handle_kinesis_event};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    samples_core::telemetry::init();
    info!("Starting employee_kinesis function");

    let ctx = WorkerContext::new().await?;
    let handler = Arc::new(ProcessEmployeeKinesis::new(ctx.employees()));
    Metrics::cold_start(ctx.metrics.as_ref(), "employee_kinesis").await;

    run(service_fn(|event: LambdaEvent<KinesisEvent>| {
        let ctx = ctx.clone();
        let handler = handler.clone();
        async move {
            let invocation = Invocation::from_context(&event.context);
            let response = handle_kinesis_event(
                handler.as_ref(),
                event.payload,
                &invocation,
                ctx.metrics.as_ref(),
            )
            .await;
            Ok::<BatchResponse, Error>(response)
        }
    }))
    .await
}
