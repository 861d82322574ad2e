use super::attributes::{Item, get_number, get_string};
use crate::error::SampleError;
use serde::{Deserialize, Serialize};

pub const STOCK_ID: &str = "StockId";
const VALUE: &str = "Value";

/// Stock value in the base currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    pub stock_id: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyValue {
    pub currency: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockWithCurrencies {
    pub stock_id: String,
    pub values: Vec<CurrencyValue>,
}

impl StockWithCurrencies {
    pub fn empty(stock_id: impl Into<String>) -> Self {
        Self {
            stock_id: stock_id.into(),
            values: Vec::new(),
        }
    }
}

pub fn item_to_stock(item: &Item) -> Result<Stock, SampleError> {
    Ok(Stock {
        stock_id: get_string(item, STOCK_ID)?,
        value: get_number(item, VALUE)?,
    })
}
