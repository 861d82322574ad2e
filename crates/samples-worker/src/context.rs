/// Worker Context - clients and configuration shared across invocations
use lambda_runtime::Error;
use samples_core::models::{Employee, SamplesConfig};
use samples_core::services::{
    ApiGatewayNotifier, CloudWatchMetricsService, ConfigProvider, ConnectionNotifier, DynamoDbRepository,
    EmployeeRepository, EnvConfigProvider, MetricsService, QueueService, S3StorageService,
    SqsQueueService, StorageService,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct WorkerContext {
    /// AWS configuration
    pub aws_config: aws_config::SdkConfig,

    /// Validated function configuration
    pub config: SamplesConfig,

    /// CloudWatch metrics
    pub metrics: Arc<dyn MetricsService>,
}

impl WorkerContext {
    pub async fn new() -> Result<Arc<Self>, Error> {
        let config = EnvConfigProvider::new()?.get_config().await?;

        let aws_config = aws_config::load_from_env().await;
        let metrics = Arc::new(CloudWatchMetricsService::new(
            aws_sdk_cloudwatch::Client::new(&aws_config),
            config.metrics_namespace.clone(),
        ));

        Ok(Arc::new(Self {
            aws_config,
            config,
            metrics,
        }))
    }

    pub fn employees(&self) -> Arc<EmployeeRepository> {
        Arc::new(DynamoDbRepository::<Employee>::new(
            aws_sdk_dynamodb::Client::new(&self.aws_config),
            &self.config.employee_table,
        ))
    }

    pub fn storage(&self) -> Arc<dyn StorageService> {
        Arc::new(S3StorageService::new(aws_sdk_s3::Client::new(&self.aws_config)))
    }

    pub fn queue(&self) -> Arc<dyn QueueService> {
        Arc::new(SqsQueueService::new(aws_sdk_sqs::Client::new(&self.aws_config)))
    }

    pub fn notifier(&self) -> Result<Arc<dyn ConnectionNotifier>, Error> {
        let callback_url = self.config.require_websocket_callback_url()?;
        Ok(Arc::new(ApiGatewayNotifier::from_sdk_config(
            &self.aws_config,
            callback_url,
        )))
    }
}
