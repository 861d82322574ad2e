use lambda_http::{Error, Request, run, service_fn};
use samples_api::ApiContext;
use samples_api::functions::create_customer;
use samples_api::middleware::observe;
use samples_core::services::Metrics;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    samples_core::telemetry::init();

    let ctx = ApiContext::new().await?;
    let publisher = ctx.publisher()?;
    let version = ctx.config.customer_event_version;
    info!(event_version = %version, "Starting create_customer function");
    Metrics::cold_start(ctx.metrics.as_ref(), "create_customer").await;

    run(service_fn(|event: Request| {
        let ctx = ctx.clone();
        let publisher = publisher.clone();
        async move {
            let response = observe(ctx.metrics.as_ref(), "create_customer", event, |event| {
                create_customer(publisher.as_ref(), version, event)
            })
            .await;
            Ok::<_, Error>(response)
        }
    }))
    .await
}
