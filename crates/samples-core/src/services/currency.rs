/// Exchange-rate lookups over HTTP
use crate::error::SampleError;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CurrencyConverter: Send + Sync {
    /// Rates from `base` to each symbol; empty when the rates are unavailable
    async fn get_currencies(
        &self,
        base: &str,
        symbols: &[String],
    ) -> Result<HashMap<String, f64>, SampleError>;
}

#[derive(Debug, Deserialize)]
struct CurrencyRates {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    rates: HashMap<String, f64>,
}

/// Client for a `latest` rates endpoint authenticated with an `apikey` header
pub struct HttpCurrencyConverter {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpCurrencyConverter {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, api_key)
    }

    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    async fn fetch_rates(&self, base: &str, symbols: &[String]) -> Result<CurrencyRates, SampleError> {
        let url = format!("{}/latest", self.base_url);
        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .query(&[("symbols", symbols.join(",").as_str()), ("base", base)])
            .send()
            .await
            .map_err(|e| SampleError::Http(format!("Currency request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(SampleError::Http(format!(
                "Currency API returned {}",
                response.status()
            )));
        }

        response
            .json::<CurrencyRates>()
            .await
            .map_err(|e| SampleError::Http(format!("Invalid currency response: {}", e)))
    }
}

#[async_trait]
impl CurrencyConverter for HttpCurrencyConverter {
    async fn get_currencies(
        &self,
        base: &str,
        symbols: &[String],
    ) -> Result<HashMap<String, f64>, SampleError> {
        match self.fetch_rates(base, symbols).await {
            Ok(rates) if rates.success => Ok(rates.rates),
            Ok(_) => {
                tracing::warn!(base = base, "Currency API reported failure");
                Ok(HashMap::new())
            }
            Err(e) => {
                tracing::warn!(base = base, error = %e, "Currency rates unavailable");
                Ok(HashMap::new())
            }
        }
    }
}

/// Fixed-rate converter for tests and local runs
#[derive(Default)]
pub struct StaticCurrencyConverter {
    rates: HashMap<String, f64>,
}

impl StaticCurrencyConverter {
    pub fn new(rates: impl IntoIterator<Item = (String, f64)>) -> Self {
        Self {
            rates: rates.into_iter().collect(),
        }
    }
}

#[async_trait]
impl CurrencyConverter for StaticCurrencyConverter {
    async fn get_currencies(
        &self,
        _base: &str,
        symbols: &[String],
    ) -> Result<HashMap<String, f64>, SampleError> {
        Ok(symbols
            .iter()
            .filter_map(|symbol| self.rates.get(symbol).map(|rate| (symbol.clone(), *rate)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn symbols() -> Vec<String> {
        vec!["USD".to_string(), "CAD".to_string()]
    }

    #[tokio::test]
    async fn test_fetches_rates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/latest"))
            .and(query_param("symbols", "USD,CAD"))
            .and(query_param("base", "EUR"))
            .and(header("apikey", "secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "base": "EUR",
                "rates": {"USD": 1.1, "CAD": 1.5}
            })))
            .mount(&server)
            .await;

        let converter = HttpCurrencyConverter::new(server.uri(), "secret");
        let rates = converter.get_currencies("EUR", &symbols()).await.unwrap();

        assert_eq!(rates.len(), 2);
        assert_eq!(rates["USD"], 1.1);
    }

    #[tokio::test]
    async fn test_unsuccessful_payload_yields_empty_map() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/latest"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": false,
                "rates": {"USD": 1.1}
            })))
            .mount(&server)
            .await;

        let converter = HttpCurrencyConverter::new(server.uri(), "secret");
        assert!(converter.get_currencies("EUR", &symbols()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_http_error_yields_empty_map() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let converter = HttpCurrencyConverter::new(format!("{}/", server.uri()), "secret");
        assert!(converter.get_currencies("EUR", &symbols()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_static_converter_filters_symbols() {
        let converter = StaticCurrencyConverter::new([("USD".to_string(), 2.0)]);
        let rates = converter.get_currencies("EUR", &symbols()).await.unwrap();
        assert_eq!(rates.len(), 1);
        assert_eq!(rates["USD"], 2.0);
    }
}
