use lambda_http::{Error, Request, run, service_fn};
use samples_api::functions::OnConnect;
use samples_api::middleware::observe;
use samples_api::{ApiContext, handle_request};
use samples_core::services::Metrics;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    samples_core::telemetry::init();
    info!("Starting ws_on_connect function");

    let ctx = ApiContext::new().await?;
    let handler = Arc::new(OnConnect::new(ctx.connections()));
    Metrics::cold_start(ctx.metrics.as_ref(), "ws_on_connect").await;

    run(service_fn(|event: Request| {
        let ctx = ctx.clone();
        let handler = handler.clone();
        async move {
            let response = observe(ctx.metrics.as_ref(), "ws_on_connect", event, |event| {
                handle_request(handler.as_ref(), event)
            })
            .await;
            Ok::<_, Error>(response)
        }
    }))
    .await
}
