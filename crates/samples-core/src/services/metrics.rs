/// Function metrics published to CloudWatch
use async_trait::async_trait;
use aws_sdk_cloudwatch::types::{Dimension, MetricDatum, StandardUnit};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;
use tokio::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricUnit {
    Count,
    Milliseconds,
    None,
}

impl From<MetricUnit> for StandardUnit {
    fn from(unit: MetricUnit) -> Self {
        match unit {
            MetricUnit::Count => StandardUnit::Count,
            MetricUnit::Milliseconds => StandardUnit::Milliseconds,
            MetricUnit::None => StandardUnit::None,
        }
    }
}

/// A single data point with its dimensions
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub name: &'static str,
    pub value: f64,
    pub unit: MetricUnit,
    pub dimensions: Vec<(&'static str, String)>,
}

impl Metric {
    pub fn count(name: &'static str, value: f64) -> Self {
        Self {
            name,
            value,
            unit: MetricUnit::Count,
            dimensions: Vec::new(),
        }
    }

    pub fn duration_ms(name: &'static str, value: f64) -> Self {
        Self {
            name,
            value,
            unit: MetricUnit::Milliseconds,
            dimensions: Vec::new(),
        }
    }

    pub fn with_dimension(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.dimensions.push((name, value.into()));
        self
    }

    fn to_datum(&self) -> MetricDatum {
        let dimensions: Vec<Dimension> = self
            .dimensions
            .iter()
            .map(|(name, value)| Dimension::builder().name(*name).value(value).build())
            .collect();

        MetricDatum::builder()
            .metric_name(self.name)
            .value(self.value)
            .unit(self.unit.into())
            .timestamp(aws_smithy_types::DateTime::from(SystemTime::now()))
            .set_dimensions((!dimensions.is_empty()).then_some(dimensions))
            .build()
    }
}

#[async_trait]
pub trait MetricsService: Send + Sync {
    /// Publishes a data point; failures are logged, never returned
    async fn record(&self, metric: Metric);
}

pub struct CloudWatchMetricsService {
    client: aws_sdk_cloudwatch::Client,
    namespace: String,
}

impl CloudWatchMetricsService {
    pub fn new(client: aws_sdk_cloudwatch::Client, namespace: impl Into<String>) -> Self {
        Self {
            client,
            namespace: namespace.into(),
        }
    }
}

#[async_trait]
impl MetricsService for CloudWatchMetricsService {
    async fn record(&self, metric: Metric) {
        let result = self
            .client
            .put_metric_data()
            .namespace(&self.namespace)
            .metric_data(metric.to_datum())
            .send()
            .await;

        match result {
            Ok(_) => tracing::debug!(metric = metric.name, value = metric.value, "Metric published"),
            Err(e) => tracing::error!(metric = metric.name, error = %e, "Failed to publish metric"),
        }
    }
}

/// Keeps every recorded value in memory, keyed by metric name
#[derive(Default)]
pub struct RecordingMetrics {
    recorded: Mutex<HashMap<&'static str, Vec<f64>>>,
}

impl RecordingMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn values(&self, name: &str) -> Vec<f64> {
        self.recorded
            .lock()
            .await
            .get(name)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl MetricsService for RecordingMetrics {
    async fn record(&self, metric: Metric) {
        self.recorded
            .lock()
            .await
            .entry(metric.name)
            .or_default()
            .push(metric.value);
    }
}

static COLD_START: AtomicBool = AtomicBool::new(true);

/// Metrics every function emits
pub struct Metrics;

impl Metrics {
    /// Once per execution environment
    pub async fn cold_start(service: &dyn MetricsService, function: &str) {
        if COLD_START.swap(false, Ordering::Relaxed) {
            service
                .record(Metric::count("ColdStart", 1.0).with_dimension("Function", function))
                .await;
        }
    }

    pub async fn records_processed(service: &dyn MetricsService, function: &str, count: usize) {
        service
            .record(
                Metric::count("RecordsProcessed", count as f64).with_dimension("Function", function),
            )
            .await;
    }

    pub async fn records_failed(service: &dyn MetricsService, function: &str, count: usize) {
        service
            .record(Metric::count("RecordsFailed", count as f64).with_dimension("Function", function))
            .await;
    }

    /// Request count by status, plus latency
    pub async fn request_completed(
        service: &dyn MetricsService,
        function: &str,
        status: u16,
        duration_ms: f64,
    ) {
        service
            .record(
                Metric::count("Requests", 1.0)
                    .with_dimension("Function", function)
                    .with_dimension("StatusCode", status.to_string()),
            )
            .await;
        service
            .record(
                Metric::duration_ms("RequestLatency", duration_ms).with_dimension("Function", function),
            )
            .await;
    }

    pub async fn error_occurred(service: &dyn MetricsService, error_type: &str, function: &str) {
        service
            .record(
                Metric::count("Errors", 1.0)
                    .with_dimension("ErrorType", error_type)
                    .with_dimension("Function", function),
            )
            .await;
    }
}
