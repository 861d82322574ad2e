use super::attributes::{Item, get_string};
use crate::error::SampleError;
use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const EMPLOYEE_ID: &str = "employee_id";
const EMAIL: &str = "email";
const FIRST_NAME: &str = "first_name";
const LAST_NAME: &str = "last_name";
const DATE_OF_BIRTH: &str = "dob";
const DATE_OF_HIRE: &str = "doh";

const STORED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, with = "flexible_datetime")]
    pub dob: NaiveDateTime,
    #[serde(default, with = "flexible_datetime")]
    pub hire_date: NaiveDateTime,
}

impl Employee {
    pub fn has_id(&self) -> bool {
        !self.employee_id.trim().is_empty()
    }
}

/// Parses ISO-8601 date-times, plain dates and `MM/DD/YYYY` dates
pub fn parse_datetime(value: &str) -> Result<NaiveDateTime, SampleError> {
    let value = value.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt);
    }

    ["%Y-%m-%d", "%m/%d/%Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| SampleError::Validation(format!("Unrecognised date: {}", value)))
}

mod flexible_datetime {
    use super::{STORED_FORMAT, parse_datetime};
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(STORED_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_datetime(&raw).map_err(serde::de::Error::custom)
    }
}

pub fn employee_to_item(employee: &Employee) -> Item {
    let mut item = HashMap::with_capacity(6);
    item.insert(EMPLOYEE_ID.to_string(), AttributeValue::S(employee.employee_id.clone()));
    item.insert(EMAIL.to_string(), AttributeValue::S(employee.email.clone()));
    item.insert(FIRST_NAME.to_string(), AttributeValue::S(employee.first_name.clone()));
    item.insert(LAST_NAME.to_string(), AttributeValue::S(employee.last_name.clone()));
    item.insert(
        DATE_OF_BIRTH.to_string(),
        AttributeValue::S(employee.dob.format(STORED_FORMAT).to_string()),
    );
    item.insert(
        DATE_OF_HIRE.to_string(),
        AttributeValue::S(employee.hire_date.format(STORED_FORMAT).to_string()),
    );
    item
}

pub fn item_to_employee(item: &Item) -> Result<Employee, SampleError> {
    let dob = get_string(item, DATE_OF_BIRTH)?;
    let doh = get_string(item, DATE_OF_HIRE)?;

    Ok(Employee {
        employee_id: get_string(item, EMPLOYEE_ID)?,
        email: get_string(item, EMAIL)?,
        first_name: get_string(item, FIRST_NAME)?,
        last_name: get_string(item, LAST_NAME)?,
        dob: parse_datetime(&dob).map_err(|e| SampleError::Repository(e.to_string()))?,
        hire_date: parse_datetime(&doh).map_err(|e| SampleError::Repository(e.to_string()))?,
    })
}
