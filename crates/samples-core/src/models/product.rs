use super::attributes::{Item, get_number, get_string};
use crate::error::SampleError;
use aws_sdk_dynamodb::types::AttributeValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "deserialize_price")]
    pub price: f64,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: round_price(price),
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Product{{id = '{}', name = '{}', price = {:.2}}}", self.id, self.name, self.price)
    }
}

/// List result returned by the product scan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductWrapper {
    pub products: Vec<Product>,
}

impl ProductWrapper {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

/// Outcome of a put against a table keyed by a single attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpsertResult {
    Inserted,
    Updated,
}

impl UpsertResult {
    /// `Updated` when the put returned the replaced item's attributes
    pub fn from_old_attributes(old: Option<&Item>) -> Self {
        match old {
            Some(attributes) if !attributes.is_empty() => Self::Updated,
            _ => Self::Inserted,
        }
    }
}

impl fmt::Display for UpsertResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inserted => write!(f, "Inserted"),
            Self::Updated => write!(f, "Updated"),
        }
    }
}

pub fn round_price(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    f64::deserialize(deserializer).map(round_price)
}

pub fn product_to_item(product: &Product) -> Item {
    let mut item = HashMap::new();
    item.insert("id".to_string(), AttributeValue::S(product.id.clone()));
    item.insert("name".to_string(), AttributeValue::S(product.name.clone()));
    item.insert(
        "price".to_string(),
        AttributeValue::N(format!("{:.2}", round_price(product.price))),
    );
    item
}

pub fn item_to_product(item: &Item) -> Result<Product, SampleError> {
    Ok(Product::new(
        get_string(item, "id")?,
        get_string(item, "name")?,
        get_number(item, "price")?,
    ))
}
