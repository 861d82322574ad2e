use super::attributes::{Item, get_string};
use crate::error::SampleError;
use aws_sdk_dynamodb::types::AttributeValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const CONNECTION_ID: &str = "connection_id";

/// An open WebSocket connection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub connection_id: String,
}

impl Connection {
    pub fn new(connection_id: impl Into<String>) -> Self {
        Self {
            connection_id: connection_id.into(),
        }
    }
}

pub fn connection_to_item(connection: &Connection) -> Item {
    HashMap::from([(
        CONNECTION_ID.to_string(),
        AttributeValue::S(connection.connection_id.clone()),
    )])
}

pub fn item_to_connection(item: &Item) -> Result<Connection, SampleError> {
    Ok(Connection::new(get_string(item, CONNECTION_ID)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_conversion() {
        let connection = Connection::new("L0SM9cOFvHcCIhw=");
        let item = connection_to_item(&connection);
        assert_eq!(item_to_connection(&item).unwrap(), connection);
    }
}
