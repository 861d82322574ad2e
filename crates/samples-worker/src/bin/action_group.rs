use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use samples_core::Invocation;
use samples_core::models::{BedrockFunctionRequest, BedrockFunctionResponse};
use samples_core::services::Metrics;
use samples_worker::functions::ActionGroupFunction;
use samples_worker::{WorkerContext, handle_bedrock_event};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    samples_core::telemetry::init();
    info!("Starting action_group function");

    let ctx = WorkerContext::new().await?;
    Metrics::cold_start(ctx.metrics.as_ref(), "action_group").await;

    run(service_fn(|event: LambdaEvent<BedrockFunctionRequest>| {
        let ctx = ctx.clone();
        async move {
            let invocation = Invocation::from_context(&event.context);
            let response = handle_bedrock_event(
                &ActionGroupFunction,
                event.payload,
                &invocation,
                ctx.metrics.as_ref(),
            )
            .await;
            Ok::<BedrockFunctionResponse, Error>(response)
        }
    }))
    .await
}
