use lambda_http::{Error, Request, run, service_fn};
use samples_api::ApiContext;
use samples_api::functions::put_product;
use samples_api::middleware::observe;
use samples_core::services::Metrics;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    samples_core::telemetry::init();
    info!("Starting put_product function");

    let ctx = ApiContext::new().await?;
    let dao = ctx.products();
    Metrics::cold_start(ctx.metrics.as_ref(), "put_product").await;

    run(service_fn(|event: Request| {
        let ctx = ctx.clone();
        let dao = dao.clone();
        async move {
            let response = observe(ctx.metrics.as_ref(), "put_product", event, |event| {
                put_product(dao.as_ref(), event)
            })
            .await;
            Ok::<_, Error>(response)
        }
    }))
    .await
}
