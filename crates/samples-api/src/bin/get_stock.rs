use lambda_http::{Error, Request, run, service_fn};
use samples_api::ApiContext;
use samples_api::functions::{StockLogic, get_stock};
use samples_api::middleware::observe;
use samples_core::services::Metrics;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    samples_core::telemetry::init();
    info!("Starting get_stock function");

    let ctx = ApiContext::new().await?;
    let logic = Arc::new(StockLogic::new(ctx.stocks(), ctx.currency_converter()?));
    Metrics::cold_start(ctx.metrics.as_ref(), "get_stock").await;

    run(service_fn(|event: Request| {
        let ctx = ctx.clone();
        let logic = logic.clone();
        async move {
            let response = observe(ctx.metrics.as_ref(), "get_stock", event, |event| {
                get_stock(logic.as_ref(), event)
            })
            .await;
            Ok::<_, Error>(response)
        }
    }))
    .await
}
