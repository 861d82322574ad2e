use crate::error::SampleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Request to register a new customer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerCommand {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub address: String,
}

impl CreateCustomerCommand {
    pub fn is_valid(&self) -> bool {
        [&self.first_name, &self.last_name, &self.address]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

/// Schema version of the customer-created event to publish
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventVersion {
    #[default]
    V1,
    V2,
    V3,
}

impl FromStr for EventVersion {
    type Err = SampleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "V1" => Ok(Self::V1),
            "V2" => Ok(Self::V2),
            "V3" => Ok(Self::V3),
            other => Err(SampleError::Config(format!(
                "Unknown customer event version: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for EventVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V1 => write!(f, "V1"),
            Self::V2 => write!(f, "V2"),
            Self::V3 => write!(f, "V3"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCreatedV1 {
    pub customer_id: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
}

/// Adds the customer's email address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCreatedV2 {
    pub customer_id: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub email: String,
}

/// Drops the customer's name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCreatedV3 {
    pub customer_id: String,
    pub address: String,
}

/// Customer-created event, tagged with its versioned type name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CustomerCreatedEvent {
    #[serde(rename = "CustomerCreatedEventV1")]
    V1(CustomerCreatedV1),
    #[serde(rename = "CustomerCreatedEventV2")]
    V2(CustomerCreatedV2),
    #[serde(rename = "CustomerCreatedEventV3")]
    V3(CustomerCreatedV3),
}

impl CustomerCreatedEvent {
    /// Placeholder address published by V2 events until the command carries one
    pub const DEFAULT_EMAIL: &'static str = "test@test.com";

    pub fn build(version: EventVersion, customer_id: &str, command: &CreateCustomerCommand) -> Self {
        match version {
            EventVersion::V1 => Self::V1(CustomerCreatedV1 {
                customer_id: customer_id.to_string(),
                first_name: command.first_name.clone(),
                last_name: command.last_name.clone(),
                address: command.address.clone(),
            }),
            EventVersion::V2 => Self::V2(CustomerCreatedV2 {
                customer_id: customer_id.to_string(),
                first_name: command.first_name.clone(),
                last_name: command.last_name.clone(),
                address: command.address.clone(),
                email: Self::DEFAULT_EMAIL.to_string(),
            }),
            EventVersion::V3 => Self::V3(CustomerCreatedV3 {
                customer_id: customer_id.to_string(),
                address: command.address.clone(),
            }),
        }
    }

    /// Versioned type name, used as the EventBridge detail type
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::V1(_) => "CustomerCreatedEventV1",
            Self::V2(_) => "CustomerCreatedEventV2",
            Self::V3(_) => "CustomerCreatedEventV3",
        }
    }

    pub fn customer_id(&self) -> &str {
        match self {
            Self::V1(e) => &e.customer_id,
            Self::V2(e) => &e.customer_id,
            Self::V3(e) => &e.customer_id,
        }
    }
}
