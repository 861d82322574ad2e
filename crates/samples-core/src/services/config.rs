/// Configuration service - loads config from environment variables
use crate::error::SampleError;
use crate::models::SamplesConfig;
use async_trait::async_trait;

#[async_trait]
pub trait ConfigProvider: Send + Sync {
    async fn get_config(&self) -> Result<SamplesConfig, SampleError>;
}

/// Environment variable-based configuration provider
pub struct EnvConfigProvider {
    config: SamplesConfig,
}

impl EnvConfigProvider {
    pub fn new() -> Result<Self, SampleError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, SampleError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = SamplesConfig::from_lookup(lookup)?;

        config
            .validate()
            .map_err(|e| SampleError::Config(format!("Invalid configuration: {}", e)))?;

        tracing::info!(
            environment = %config.environment,
            product_table = %config.product_table,
            "Configuration validated successfully"
        );

        Ok(Self { config })
    }
}

#[async_trait]
impl ConfigProvider for EnvConfigProvider {
    async fn get_config(&self) -> Result<SamplesConfig, SampleError> {
        // Configuration is immutable during Lambda lifetime
        Ok(self.config.clone())
    }
}
