use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use samples_core::Invocation;
use samples_core::models::{BatchResponse, SqsEvent};
use samples_core::services::Metrics;
use samples_worker::functions::WsMessage;
use samples_worker::{WorkerContext, handle_sqs_event};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    samples_core::telemetry::init();
    info!("Starting ws_message function");

    let ctx = WorkerContext::new().await?;
    let handler = Arc::new(WsMessage::new(ctx.notifier()?));
    Metrics::cold_start(ctx.metrics.as_ref(), "ws_message").await;

    run(service_fn(|event: LambdaEvent<SqsEvent>| {
        let ctx = ctx.clone();
        let handler = handler.clone();
        async move {
            let invocation = Invocation::from_context(&event.context);
            let response =
                handle_sqs_event(handler.as_ref(), event.payload, &invocation, ctx.metrics.as_ref())
                    .await;
            Ok::<BatchResponse, Error>(response)
        }
    }))
    .await
}
