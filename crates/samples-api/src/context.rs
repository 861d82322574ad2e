/// API Context - clients and configuration shared across invocations
use lambda_http::Error;
use samples_core::models::{Connection, Employee, SamplesConfig};
use samples_core::services::{
    CloudWatchMetricsService, ConfigProvider, ConnectionRepository, CurrencyConverter, DynamoDbProducts,
    DynamoDbRepository, DynamoDbStocks, EmployeeRepository, EnvConfigProvider,
    EventBridgePublisher, EventPublisher, HttpCurrencyConverter, MetricsService, ProductsDao,
    S3StorageService, StockRepository, StorageService,
};
use std::sync::Arc;

/// Built once per cold start and cloned into every invocation
#[derive(Clone)]
pub struct ApiContext {
    /// AWS configuration
    pub aws_config: aws_config::SdkConfig,

    /// Validated function configuration
    pub config: SamplesConfig,

    /// DynamoDB client
    pub dynamodb_client: aws_sdk_dynamodb::Client,

    /// CloudWatch metrics
    pub metrics: Arc<dyn MetricsService>,
}

impl ApiContext {
    pub async fn new() -> Result<Arc<Self>, Error> {
        let config = EnvConfigProvider::new()?.get_config().await?;

        let aws_config = aws_config::load_from_env().await;
        let dynamodb_client = aws_sdk_dynamodb::Client::new(&aws_config);
        let metrics = Arc::new(CloudWatchMetricsService::new(
            aws_sdk_cloudwatch::Client::new(&aws_config),
            config.metrics_namespace.clone(),
        ));

        Ok(Arc::new(Self {
            aws_config,
            config,
            dynamodb_client,
            metrics,
        }))
    }

    pub fn products(&self) -> Arc<dyn ProductsDao> {
        Arc::new(DynamoDbProducts::new(
            self.dynamodb_client.clone(),
            &self.config.product_table,
        ))
    }

    pub fn employees(&self) -> Arc<EmployeeRepository> {
        Arc::new(DynamoDbRepository::<Employee>::new(
            self.dynamodb_client.clone(),
            &self.config.employee_table,
        ))
    }

    pub fn connections(&self) -> Arc<ConnectionRepository> {
        Arc::new(DynamoDbRepository::<Connection>::new(
            self.dynamodb_client.clone(),
            &self.config.connection_table,
        ))
    }

    pub fn stocks(&self) -> Arc<dyn StockRepository> {
        Arc::new(DynamoDbStocks::new(
            self.dynamodb_client.clone(),
            &self.config.stock_table,
        ))
    }

    pub fn storage(&self) -> Arc<dyn StorageService> {
        Arc::new(S3StorageService::new(aws_sdk_s3::Client::new(&self.aws_config)))
    }

    pub fn publisher(&self) -> Result<Arc<dyn EventPublisher>, Error> {
        let bus = self.config.require_event_bus_name()?;
        Ok(Arc::new(EventBridgePublisher::new(
            aws_sdk_eventbridge::Client::new(&self.aws_config),
            bus,
            self.config.customer_event_source(),
        )))
    }

    pub fn currency_converter(&self) -> Result<Arc<dyn CurrencyConverter>, Error> {
        let base_address = self.config.require_currency_base_address()?;
        let api_key = self.config.currency.api_key.clone().unwrap_or_default();
        Ok(Arc::new(HttpCurrencyConverter::new(base_address, api_key)))
    }
}
