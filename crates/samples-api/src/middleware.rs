//! Request metrics wrapper shared by every HTTP function
use crate::handler::invocation_from_request;
use lambda_http::{Body, Request, Response};
use samples_core::SampleError;
use samples_core::services::{Metrics, MetricsService};
use std::future::Future;
use std::time::Instant;

/// Runs a function and emits request count, latency and server errors
///
/// Emits:
/// - Requests (by function and status)
/// - RequestLatency (by function)
/// - Errors (by function, 5xx only)
///
/// Emission shares the invocation deadline with the function; metrics still
/// pending at the cutoff are dropped and the response is returned as is.
pub async fn observe<F, Fut>(
    metrics: &dyn MetricsService,
    function: &str,
    request: Request,
    call: F,
) -> Response<Body>
where
    F: FnOnce(Request) -> Fut,
    Fut: Future<Output = Response<Body>>,
{
    let deadline = invocation_from_request(&request).deadline;
    let start = Instant::now();
    let response = call(request).await;
    let duration_ms = start.elapsed().as_millis() as f64;
    let status = response.status();

    let emitted = deadline
        .run("record_request_metrics", async {
            Metrics::request_completed(metrics, function, status.as_u16(), duration_ms).await;
            if status.is_server_error() {
                Metrics::error_occurred(metrics, status.as_str(), function).await;
            }
            Ok::<_, SampleError>(())
        })
        .await;

    if let Err(e) = emitted {
        tracing::warn!(function = function, status = status.as_u16(), error = %e, "Request metrics dropped");
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response;
    use async_trait::async_trait;
    use lambda_http::{Context, RequestExt, http};
    use samples_core::services::{Metric, RecordingMetrics};
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    struct StalledMetrics;

    #[async_trait]
    impl MetricsService for StalledMetrics {
        async fn record(&self, _metric: Metric) {
            tokio::time::sleep(Duration::from_secs(30)).await;
        }
    }

    fn request() -> Request {
        http::Request::builder()
            .uri("https://api.example.com/products")
            .body(Body::Empty)
            .unwrap()
    }

    fn request_with_deadline(remaining: Duration) -> Request {
        let deadline = SystemTime::now() + remaining;
        let mut context = Context::default();
        context.deadline = deadline.duration_since(UNIX_EPOCH).unwrap().as_millis() as u64;
        request().with_lambda_context(context)
    }

    #[tokio::test]
    async fn test_server_error_is_counted() {
        let metrics = RecordingMetrics::new();
        let response = observe(&metrics, "get_products", request(), |_| async {
            response::empty(503)
        })
        .await;

        assert_eq!(response.status(), 503);
        assert_eq!(metrics.values("Requests").await, vec![1.0]);
        assert_eq!(metrics.values("Errors").await, vec![1.0]);
    }

    #[tokio::test]
    async fn test_success_has_no_error_metric() {
        let metrics = RecordingMetrics::new();
        observe(&metrics, "get_products", request(), |_| async {
            response::empty(200)
        })
        .await;

        assert_eq!(metrics.values("RequestLatency").await.len(), 1);
        assert!(metrics.values("Errors").await.is_empty());
    }

    #[tokio::test]
    async fn test_stalled_metrics_do_not_hold_the_response() {
        let started = Instant::now();
        let observed = tokio::time::timeout(
            Duration::from_secs(5),
            observe(
                &StalledMetrics,
                "put_employee",
                request_with_deadline(Duration::from_millis(300)),
                |_| async { response::text(503, "Timed Out") },
            ),
        )
        .await;

        let response = observed.expect("response held back by metric emission");
        assert_eq!(response.status(), 503);
        assert_eq!(response.headers()["Content-Type"], "text/plain");
        assert!(started.elapsed() < Duration::from_secs(2));
    }
}
