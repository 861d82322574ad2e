pub mod config;
pub mod currency;
pub mod events;
pub mod metrics;
pub mod products;
pub mod queue;
pub mod repository;
pub mod stocks;
pub mod storage;
pub mod websocket;

pub use config::{ConfigProvider, EnvConfigProvider};
pub use currency::{CurrencyConverter, HttpCurrencyConverter, StaticCurrencyConverter};
pub use events::{EventBridgePublisher, EventPublisher, InMemoryPublisher};
pub use metrics::{
    CloudWatchMetricsService, Metric, MetricUnit, Metrics, MetricsService, RecordingMetrics,
};
pub use products::{DynamoDbProducts, InMemoryProducts, ProductsDao};
pub use queue::{InMemoryQueue, QueueService, SqsQueueService};
pub use repository::{
    ConnectionRepository, DynamoDbRepository, EmployeeRepository, InMemoryRepository,
    ItemRepository, TableRecord,
};
pub use stocks::{DynamoDbStocks, InMemoryStocks, StockRepository};
pub use storage::{InMemoryStorage, S3StorageService, StorageService};
pub use websocket::{ApiGatewayNotifier, ConnectionNotifier, InMemoryNotifier};
