/// Application constants
///
/// Environment variable names and their defaults, grouped by concern.
// ============================================================================
// DynamoDB Tables
// ============================================================================
/// Environment variable holding the products table name
pub const PRODUCT_TABLE_ENV: &str = "PRODUCT_TABLE_NAME";

/// Default products table name
pub const DEFAULT_PRODUCT_TABLE: &str = "Products";

/// Environment variable holding the employees table name
pub const EMPLOYEE_TABLE_ENV: &str = "EMPLOYEE_TABLE_NAME";

/// Default employees table name
pub const DEFAULT_EMPLOYEE_TABLE: &str = "Employees";

/// Environment variable holding the WebSocket connections table name
pub const CONNECTION_TABLE_ENV: &str = "CONNECTION_TABLE_NAME";

/// Default connections table name
pub const DEFAULT_CONNECTION_TABLE: &str = "Connections";

/// Environment variable holding the stocks table name
pub const STOCK_TABLE_ENV: &str = "STOCK_TABLE_NAME";

/// Default stocks table name
pub const DEFAULT_STOCK_TABLE: &str = "Stocks";

/// Maximum number of items returned by a product scan
pub const PRODUCT_SCAN_LIMIT: i32 = 20;

// ============================================================================
// Messaging
// ============================================================================

/// Queue that receives S3 notification messages
pub const QUEUE_NAME_ENV: &str = "QUEUE_NAME";

/// Bucket that receives transformed S3 objects
pub const DESTINATION_BUCKET_ENV: &str = "DESTINATION_BUCKET";

/// EventBridge bus for customer events
pub const EVENT_BUS_NAME_ENV: &str = "EVENT_BUS_NAME";

/// Deployment environment, used in the EventBridge source
pub const ENVIRONMENT_ENV: &str = "ENV";

/// Default deployment environment
pub const DEFAULT_ENVIRONMENT: &str = "dev";

/// Customer event version to publish (V1, V2 or V3)
pub const CUSTOMER_EVENT_VERSION_ENV: &str = "CUSTOMER_EVENT_VERSION";

/// API Gateway Management endpoint for WebSocket callbacks
pub const WEBSOCKET_CALLBACK_URL_ENV: &str = "WEBSOCKET_CALLBACK_URL";

/// Message attribute carrying the WebSocket connection id
pub const CONNECTION_ID_ATTRIBUTE: &str = "connectionId";

// ============================================================================
// Currency Converter
// ============================================================================

/// Base address of the currency rates API
pub const CURRENCY_BASE_ADDRESS_ENV: &str = "CURRENCY_BASE_ADDRESS";

/// API key for the currency rates API
pub const CURRENCY_API_KEY_ENV: &str = "CURRENCY_API_KEY";

/// Currency stock values are stored in
pub const BASE_CURRENCY: &str = "EUR";

/// Currencies stock values are converted to
pub const TARGET_CURRENCIES: [&str; 3] = ["USD", "CAD", "AUD"];

// ============================================================================
// Timing
// ============================================================================

/// Fraction of the remaining execution time reserved before aborting (0.25%)
pub const ABORT_PAD_FRACTION: f64 = 0.0025;

// ============================================================================
// Metrics
// ============================================================================

/// Environment variable overriding the metrics namespace
pub const METRICS_NAMESPACE_ENV: &str = "METRICS_NAMESPACE";

/// Default CloudWatch namespace
pub const DEFAULT_METRICS_NAMESPACE: &str = "ServerlessSamples";
