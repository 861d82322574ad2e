//! Stock value lookup converted into a fixed set of currencies.
//!
//! `StockLogic` only talks to the `StockRepository` and `CurrencyConverter`
//! ports, so the HTTP function stays a thin adapter around it.

use crate::handler::invocation_from_request;
use crate::response;
use lambda_http::{Body, Request, RequestExt, Response};
use samples_core::constants::{BASE_CURRENCY, TARGET_CURRENCIES};
use samples_core::models::{CurrencyValue, StockWithCurrencies};
use samples_core::services::{CurrencyConverter, StockRepository};
use samples_core::{Invocation, SampleError};
use std::sync::Arc;

pub struct StockLogic {
    repository: Arc<dyn StockRepository>,
    currency: Arc<dyn CurrencyConverter>,
}

impl StockLogic {
    pub fn new(repository: Arc<dyn StockRepository>, currency: Arc<dyn CurrencyConverter>) -> Self {
        Self {
            repository,
            currency,
        }
    }

    /// Stock value in the base currency followed by each converted value
    ///
    /// An unknown stock yields an empty value list rather than an error.
    pub async fn retrieve_stock_values(
        &self,
        stock_id: &str,
        invocation: &Invocation,
    ) -> Result<StockWithCurrencies, SampleError> {
        let stock = match invocation
            .deadline
            .run("get_stock_value", self.repository.get_stock_value(stock_id))
            .await
        {
            Ok(stock) => stock,
            Err(SampleError::NotFound(message)) => {
                tracing::info!(stock_id = %stock_id, message = %message, "Stock not found");
                return Ok(StockWithCurrencies::empty(stock_id));
            }
            Err(e) => return Err(e),
        };

        let symbols: Vec<String> = TARGET_CURRENCIES.iter().map(|s| s.to_string()).collect();
        let rates = invocation
            .deadline
            .run(
                "get_currencies",
                self.currency.get_currencies(BASE_CURRENCY, &symbols),
            )
            .await?;

        let mut values = Vec::with_capacity(symbols.len() + 1);
        values.push(CurrencyValue {
            currency: BASE_CURRENCY.to_string(),
            value: stock.value,
        });
        // Keep the target order; symbols the rates API skipped are left out
        for symbol in symbols {
            if let Some(rate) = rates.get(&symbol) {
                values.push(CurrencyValue {
                    currency: symbol,
                    value: stock.value * rate,
                });
            }
        }

        Ok(StockWithCurrencies {
            stock_id: stock.stock_id,
            values,
        })
    }
}

/// `GET /stock/{StockId}`
pub async fn get_stock(logic: &StockLogic, request: Request) -> Response<Body> {
    let Some(stock_id) = request
        .path_parameters()
        .first("StockId")
        .map(|id| id.to_string())
    else {
        return response::text(400, "Stock id not found on request");
    };

    let invocation = invocation_from_request(&request);
    match logic.retrieve_stock_values(&stock_id, &invocation).await {
        Ok(stock) => response::json(200, &stock),
        Err(e) => {
            tracing::error!(stock_id = %stock_id, error = %e, "Failed to retrieve stock values");
            response::empty(e.status_code())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use samples_core::services::{InMemoryStocks, StaticCurrencyConverter};

    fn logic() -> StockLogic {
        StockLogic::new(
            Arc::new(InMemoryStocks::new([("AMZN".to_string(), 100.0)])),
            Arc::new(StaticCurrencyConverter::new([
                ("USD".to_string(), 1.5),
                ("CAD".to_string(), 2.0),
                ("AUD".to_string(), 2.5),
            ])),
        )
    }

    #[tokio::test]
    async fn test_values_start_with_base_currency() {
        let stock = logic()
            .retrieve_stock_values("AMZN", &Invocation::default())
            .await
            .unwrap();

        let currencies: Vec<&str> = stock.values.iter().map(|v| v.currency.as_str()).collect();
        assert_eq!(currencies, vec!["EUR", "USD", "CAD", "AUD"]);
        assert_eq!(stock.values[0].value, 100.0);
        assert_eq!(stock.values[2].value, 200.0);
    }

    #[tokio::test]
    async fn test_unknown_stock_is_empty() {
        let stock = logic()
            .retrieve_stock_values("NOPE", &Invocation::default())
            .await
            .unwrap();

        assert_eq!(stock, StockWithCurrencies::empty("NOPE"));
    }
}
