/// Configuration models
use crate::constants::*;
use crate::error::SampleError;
use crate::models::customer::EventVersion;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplesConfig {
    pub product_table: String,
    pub employee_table: String,
    pub connection_table: String,
    pub stock_table: String,
    pub queue_name: Option<String>,
    pub destination_bucket: Option<String>,
    pub event_bus_name: Option<String>,
    pub environment: String,
    pub websocket_callback_url: Option<String>,
    pub currency: CurrencyApiConfig,
    pub customer_event_version: EventVersion,
    pub metrics_namespace: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurrencyApiConfig {
    pub base_address: Option<String>,
    pub api_key: Option<String>,
}

impl Default for SamplesConfig {
    fn default() -> Self {
        Self {
            product_table: DEFAULT_PRODUCT_TABLE.to_string(),
            employee_table: DEFAULT_EMPLOYEE_TABLE.to_string(),
            connection_table: DEFAULT_CONNECTION_TABLE.to_string(),
            stock_table: DEFAULT_STOCK_TABLE.to_string(),
            queue_name: None,
            destination_bucket: None,
            event_bus_name: None,
            environment: DEFAULT_ENVIRONMENT.to_string(),
            websocket_callback_url: None,
            currency: CurrencyApiConfig::default(),
            customer_event_version: EventVersion::default(),
            metrics_namespace: DEFAULT_METRICS_NAMESPACE.to_string(),
        }
    }
}

impl SamplesConfig {
    /// Builds the configuration from a key lookup, falling back to defaults
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SampleError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let get_or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let customer_event_version = match get(CUSTOMER_EVENT_VERSION_ENV) {
            Some(raw) => raw.parse()?,
            None => EventVersion::default(),
        };

        Ok(Self {
            product_table: get_or(PRODUCT_TABLE_ENV, DEFAULT_PRODUCT_TABLE),
            employee_table: get_or(EMPLOYEE_TABLE_ENV, DEFAULT_EMPLOYEE_TABLE),
            connection_table: get_or(CONNECTION_TABLE_ENV, DEFAULT_CONNECTION_TABLE),
            stock_table: get_or(STOCK_TABLE_ENV, DEFAULT_STOCK_TABLE),
            queue_name: get(QUEUE_NAME_ENV),
            destination_bucket: get(DESTINATION_BUCKET_ENV),
            event_bus_name: get(EVENT_BUS_NAME_ENV),
            environment: get_or(ENVIRONMENT_ENV, DEFAULT_ENVIRONMENT),
            websocket_callback_url: get(WEBSOCKET_CALLBACK_URL_ENV),
            currency: CurrencyApiConfig {
                base_address: get(CURRENCY_BASE_ADDRESS_ENV),
                api_key: get(CURRENCY_API_KEY_ENV),
            },
            customer_event_version,
            metrics_namespace: get_or(METRICS_NAMESPACE_ENV, DEFAULT_METRICS_NAMESPACE),
        })
    }

    pub fn validate(&self) -> Result<(), String> {
        let tables = [
            (PRODUCT_TABLE_ENV, &self.product_table),
            (EMPLOYEE_TABLE_ENV, &self.employee_table),
            (CONNECTION_TABLE_ENV, &self.connection_table),
            (STOCK_TABLE_ENV, &self.stock_table),
        ];

        for (key, value) in tables {
            if value.trim().is_empty() {
                return Err(format!("{} cannot be empty", key));
            }
        }

        if let Some(url) = &self.websocket_callback_url {
            url::Url::parse(url).map_err(|e| format!("Invalid {}: {}", WEBSOCKET_CALLBACK_URL_ENV, e))?;
        }

        if let Some(url) = &self.currency.base_address {
            url::Url::parse(url).map_err(|e| format!("Invalid {}: {}", CURRENCY_BASE_ADDRESS_ENV, e))?;
        }

        Ok(())
    }

    pub fn require_queue_name(&self) -> Result<&str, SampleError> {
        required(self.queue_name.as_deref(), QUEUE_NAME_ENV)
    }

    pub fn require_destination_bucket(&self) -> Result<&str, SampleError> {
        required(self.destination_bucket.as_deref(), DESTINATION_BUCKET_ENV)
    }

    pub fn require_event_bus_name(&self) -> Result<&str, SampleError> {
        required(self.event_bus_name.as_deref(), EVENT_BUS_NAME_ENV)
    }

    pub fn require_websocket_callback_url(&self) -> Result<&str, SampleError> {
        required(self.websocket_callback_url.as_deref(), WEBSOCKET_CALLBACK_URL_ENV)
    }

    pub fn require_currency_base_address(&self) -> Result<&str, SampleError> {
        required(self.currency.base_address.as_deref(), CURRENCY_BASE_ADDRESS_ENV)
    }

    /// EventBridge source for customer events
    pub fn customer_event_source(&self) -> String {
        format!("com.{}.customer", self.environment)
    }
}

fn required<'a>(value: Option<&'a str>, key: &str) -> Result<&'a str, SampleError> {
    value.ok_or_else(|| SampleError::Config(format!("{} was not set", key)))
}
